pub mod cli;
pub mod site_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "site-stitch")]
#[command(about = "Stitches a shared footer fragment into static pages")]
pub struct CliConfig {
    /// URL of the shared footer fragment
    #[arg(long)]
    pub footer_url: String,

    /// Pages to stitch, relative to the site root
    #[arg(long, value_delimiter = ',')]
    pub pages: Vec<String>,

    /// Element the fetched fragment is injected into
    #[arg(long, default_value = "footer-placeholder")]
    pub placeholder_id: String,

    /// Elements whose text is overwritten with the current year
    #[arg(long, value_delimiter = ',', default_value = "currentYear")]
    pub year_ids: Vec<String>,

    /// Directory the page paths are resolved against
    #[arg(long, default_value = ".")]
    pub site_root: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn footer_url(&self) -> &str {
        &self.footer_url
    }

    fn placeholder_id(&self) -> &str {
        &self.placeholder_id
    }

    fn year_element_ids(&self) -> &[String] {
        &self.year_ids
    }

    fn pages(&self) -> &[String] {
        &self.pages
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("footer_url", &self.footer_url)?;
        validation::validate_element_id("placeholder_id", &self.placeholder_id)?;

        for id in &self.year_ids {
            validation::validate_element_id("year_ids", id)?;
        }

        if self.pages.is_empty() {
            return Err(crate::utils::error::StitchError::MissingConfigError {
                field: "pages".to_string(),
            });
        }
        for page in &self.pages {
            validation::validate_path("pages", page)?;
        }

        validation::validate_path("site_root", &self.site_root)?;

        Ok(())
    }
}
