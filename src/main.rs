use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palette_converter::cli::Cli;
use palette_converter::config::{AppConfig, CONFIG_ENV};
use palette_converter::services::ConversionPipeline;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI, on stderr so stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_file = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let config = AppConfig::load(config_file.as_deref());

    let job = cli.into_job(&config)?;
    tracing::debug!(?job, "Resolved conversion job");

    let report = ConversionPipeline::run(&job.input, &job.palette, &job.output)?;

    tracing::info!(
        width = report.width,
        height = report.height,
        changed = report.changed,
        "Conversion complete"
    );

    Ok(())
}
