use crate::core::{dom, year};
use crate::domain::model::AssembledPage;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, StitchError};
use reqwest::Client;

pub struct FooterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> FooterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FooterPipeline<S, C> {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Fetching fragment from: {}", self.config.footer_url());
        let response = self.client.get(self.config.footer_url()).send().await?;

        tracing::debug!("Fragment response status: {}", response.status());

        if !response.status().is_success() {
            return Err(StitchError::HttpStatusError {
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn assemble(&self, fragment: &str) -> Result<Vec<AssembledPage>> {
        let year_text = year::current_year().to_string();
        let mut pages = Vec::new();

        for path in self.config.pages() {
            let raw = self.storage.read_file(path).await?;
            let html = String::from_utf8(raw)?;

            // 先塞進 fragment，年份再蓋上去
            let mut html = dom::set_markup_by_id(&html, self.config.placeholder_id(), fragment)?;

            for id in self.config.year_element_ids() {
                match dom::set_text_by_id(&html, id, &year_text) {
                    Ok(updated) => html = updated,
                    Err(StitchError::ElementNotFoundError { id }) => {
                        // 注入已經完成，年份元素缺席只記一筆警告
                        tracing::warn!("Year element #{} not found in {}", id, path);
                    }
                    Err(e) => return Err(e),
                }
            }

            pages.push(AssembledPage {
                path: path.clone(),
                html,
            });
        }

        Ok(pages)
    }

    async fn publish(&self, pages: Vec<AssembledPage>) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(pages.len());

        for page in pages {
            tracing::debug!("Writing {} ({} bytes)", page.path, page.html.len());
            self.storage
                .write_file(&page.path, page.html.as_bytes())
                .await?;
            written.push(page.path);
        }

        Ok(written)
    }
}
