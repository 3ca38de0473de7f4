use clap::Parser;
use site_stitch::utils::{logger, validation::Validate};
use site_stitch::{CliConfig, FooterPipeline, LocalStorage, StitchEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting site-stitch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let site_root = config.site_root.clone();

    // 創建存儲和管道，跑一次頁面載入流程
    let storage = LocalStorage::new(site_root);
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    match engine.run().await {
        Ok(written) => {
            tracing::info!("✅ Stitch completed successfully!");
            println!("✅ Stitched {} page(s)", written.len());
            for path in &written {
                println!("📄 {}", path);
            }
        }
        Err(e) => {
            // 頁尾是裝飾性功能：只留一行診斷日誌，頁面維持原樣
            tracing::error!("Error loading footer: {}", e);
        }
    }

    Ok(())
}
