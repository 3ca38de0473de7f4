use crate::core::publications::DBLP_SPARQL_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, StitchError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub footer: FooterSection,
    pub publications: Option<PublicationsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    #[serde(default = "default_site_root")]
    pub root: String,
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterSection {
    pub url: String,
    #[serde(default = "default_placeholder_id")]
    pub placeholder_id: String,
    #[serde(default = "default_year_ids")]
    pub year_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationsSection {
    #[serde(default = "default_sparql_endpoint")]
    pub endpoint: String,
    pub author_id: String,
    #[serde(default = "default_publications_output")]
    pub output: String,
    #[serde(default = "default_publications_formats")]
    pub formats: Vec<String>,
}

fn default_site_root() -> String {
    ".".to_string()
}

fn default_placeholder_id() -> String {
    "footer-placeholder".to_string()
}

fn default_year_ids() -> Vec<String> {
    vec!["currentYear".to_string()]
}

fn default_sparql_endpoint() -> String {
    DBLP_SPARQL_ENDPOINT.to_string()
}

fn default_publications_output() -> String {
    "dblp_papers_detailed".to_string()
}

fn default_publications_formats() -> Vec<String> {
    vec!["json".to_string()]
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StitchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StitchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FOOTER_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.name", &self.site.name)?;
        validation::validate_path("site.root", &self.site.root)?;

        if self.site.pages.is_empty() {
            return Err(StitchError::MissingConfigError {
                field: "site.pages".to_string(),
            });
        }
        for page in &self.site.pages {
            validation::validate_path("site.pages", page)?;
        }

        validation::validate_url("footer.url", &self.footer.url)?;
        validation::validate_element_id("footer.placeholder_id", &self.footer.placeholder_id)?;
        for id in &self.footer.year_ids {
            validation::validate_element_id("footer.year_ids", id)?;
        }

        if let Some(publications) = &self.publications {
            validation::validate_url("publications.endpoint", &publications.endpoint)?;
            validation::validate_non_empty_string(
                "publications.author_id",
                &publications.author_id,
            )?;
            validation::validate_path("publications.output", &publications.output)?;
            validation::validate_output_formats("publications.formats", &publications.formats)?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn footer_url(&self) -> &str {
        &self.footer.url
    }

    fn placeholder_id(&self) -> &str {
        &self.footer.placeholder_id
    }

    fn year_element_ids(&self) -> &[String] {
        &self.footer.year_ids
    }

    fn pages(&self) -> &[String] {
        &self.site.pages
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
