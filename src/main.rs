use chartlift::utils::{logger, validation::Validate};
use chartlift::{ChartEngine, CliConfig, DocumentPipeline, GeminiClient, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting chartlift");
    if config.verbose {
        tracing::debug!(
            "Model: {}, output path: {}",
            config.model,
            config.output_path
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let client = GeminiClient::from_config(&config);
    let pipeline = DocumentPipeline::new(storage, config.clone(), client);
    let engine = ChartEngine::new(pipeline);

    match engine.run(&config.file_a, &config.file_b).await {
        Ok((output_a, output_b)) => {
            tracing::info!("Both documents processed successfully");
            println!("✅ Chart data extracted from both documents");
            println!("📁 {}", output_a);
            println!("📁 {}", output_b);
        }
        Err(e) => {
            tracing::error!("Processing failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
