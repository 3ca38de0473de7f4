use clap::Parser;
use site_stitch::config::site_config::SiteConfig;
use site_stitch::core::publications::PublicationsPipeline;
use site_stitch::utils::error::ErrorSeverity;
use site_stitch::utils::{logger, validation::Validate};
use site_stitch::{FooterPipeline, LocalStorage, StitchEngine};

#[derive(Parser)]
#[command(name = "toml-site")]
#[command(about = "Site assembly driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be stitched without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven site assembly");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match SiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No pages will be written");
        return Ok(());
    }

    let site_root = config.site.root.clone();
    let publications = config.publications.clone();

    // 頁尾縫合：每個頁面跑一次載入流程
    let storage = LocalStorage::new(site_root.clone());
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

    // 出版品清單（有配置才跑）
    if let Some(publications) = publications {
        tracing::info!("📚 Aggregating publications for {}", publications.author_id);

        let storage = LocalStorage::new(site_root);
        let pipeline =
            PublicationsPipeline::new(storage, publications.endpoint, publications.author_id);

        let result = async {
            let papers = pipeline.fetch().await?;
            if papers.is_empty() {
                return Ok(Vec::new());
            }
            let rendered = pipeline.render(papers)?;
            pipeline
                .save(&rendered, &publications.output, &publications.formats)
                .await
        }
        .await;

        match result {
            Ok(written) if written.is_empty() => {
                println!("No papers found.");
            }
            Ok(written) => {
                for path in &written {
                    tracing::info!("📁 Output saved to: {}", path);
                    println!("📁 {}", path);
                }
            }
            Err(e) => {
                tracing::error!(
                    "❌ Publications aggregation failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());

                let exit_code = match e.severity() {
                    ErrorSeverity::Low => 0,
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };

                if exit_code > 0 {
                    std::process::exit(exit_code);
                }
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &SiteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site.name);
    println!("  Root: {}", config.site.root);
    println!("  Pages: {}", config.site.pages.join(", "));
    println!("  Fragment: {}", config.footer.url);
    println!("  Placeholder: #{}", config.footer.placeholder_id);
    println!("  Year elements: {}", config.footer.year_ids.join(", "));

    if let Some(publications) = &config.publications {
        println!(
            "  Publications: author {} -> {} ({})",
            publications.author_id,
            publications.output,
            publications.formats.join(", ")
        );
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
