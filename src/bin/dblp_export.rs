use clap::Parser;
use site_stitch::core::publications::{PublicationsPipeline, DBLP_SPARQL_ENDPOINT};
use site_stitch::domain::ports::Storage;
use site_stitch::utils::error::ErrorSeverity;
use site_stitch::utils::logger;
use site_stitch::LocalStorage;

#[derive(Parser)]
#[command(name = "dblp-export")]
#[command(about = "Fetches one author's publication list from DBLP via SPARQL")]
struct Args {
    /// DBLP author ID (e.g. 332/1508)
    #[arg(long, default_value = "332/1508")]
    author_id: String,

    /// SPARQL endpoint to query
    #[arg(long, default_value = DBLP_SPARQL_ENDPOINT)]
    endpoint: String,

    /// Output basename; the format extension is appended
    #[arg(long, default_value = "dblp_papers_detailed")]
    output: String,

    /// Output formats (json, csv)
    #[arg(long, value_delimiter = ',', default_value = "json")]
    formats: Vec<String>,

    /// Directory outputs are written into
    #[arg(long, default_value = ".")]
    output_path: String,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

async fn run<S: Storage>(
    pipeline: &PublicationsPipeline<S>,
    args: &Args,
) -> site_stitch::Result<Vec<String>> {
    let papers = pipeline.fetch().await?;

    if papers.is_empty() {
        return Ok(Vec::new());
    }

    let rendered = pipeline.render(papers)?;
    pipeline.save(&rendered, &args.output, &args.formats).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Fetching publications from DBLP using SPARQL...");
    println!("Fetching publications from DBLP using SPARQL...");

    let storage = LocalStorage::new(args.output_path.clone());
    let pipeline =
        PublicationsPipeline::new(storage, args.endpoint.clone(), args.author_id.clone());

    match run(&pipeline, &args).await {
        Ok(written) if written.is_empty() => {
            println!("No papers found.");
        }
        Ok(written) => {
            for path in &written {
                tracing::info!("📁 Data saved to: {}", path);
                println!("Data saved to {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
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

    Ok(())
}
