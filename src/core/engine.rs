use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct StitchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> StitchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the page-load chain once: fetch the shared fragment, stitch it
    /// into every configured page, write the pages back.
    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Fetching shared fragment...");
        let fragment = self.pipeline.fetch().await?;
        tracing::info!("Fetched fragment ({} bytes)", fragment.len());

        tracing::info!("Assembling pages...");
        let pages = self.pipeline.assemble(&fragment).await?;
        tracing::info!("Assembled {} page(s)", pages.len());

        let written = self.pipeline.publish(pages).await?;
        tracing::info!("Wrote {} page(s)", written.len());

        Ok(written)
    }
}
