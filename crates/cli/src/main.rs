mod args;
mod metrics;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::{
    load_config_with_overrides, validate_config, CarouselPipeline, ManifestSource, Recognizer,
    TesseractRecognizer,
};

use args::Cli;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("carousel-xtractor {}", VERSION);

    let config = load_config_with_overrides(cli.config.as_deref(), &cli.overrides())
        .context("Failed to load configuration")?;
    validate_config(&config).context("Configuration validation failed")?;

    let manifest = config
        .source
        .manifest
        .clone()
        .context("No post source configured: pass --manifest or set [source].manifest")?;
    info!("Reading posts from {:?}", manifest);
    let source = ManifestSource::new(manifest);

    let recognizer = TesseractRecognizer::new(config.ocr.clone());
    if !cli.dry_run {
        recognizer
            .validate()
            .await
            .context("Tesseract OCR is not available; install it or set [ocr].tesseract_path")?;
        info!("Using recognizer: {}", recognizer.name());
    }

    let pipeline = CarouselPipeline::new(config, source, recognizer)?;

    if cli.dry_run {
        let posts = pipeline.list_posts().await?;
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    let result = pipeline.run().await?;
    println!("Export written to {}", result.report_path.display());

    if cli.print_metrics {
        print!("{}", metrics::encode_metrics()?);
    }

    Ok(())
}
