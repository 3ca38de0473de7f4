use crate::domain::model::AssembledPage;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn footer_url(&self) -> &str;
    fn placeholder_id(&self) -> &str;
    fn year_element_ids(&self) -> &[String];
    fn pages(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<String>;
    async fn assemble(&self, fragment: &str) -> Result<Vec<AssembledPage>>;
    async fn publish(&self, pages: Vec<AssembledPage>) -> Result<Vec<String>>;
}
