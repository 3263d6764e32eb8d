pub mod generator;
pub mod shared;

use clap::Parser;
use std::path::PathBuf;

/// Генератор статического документа materiales.json
#[derive(Debug, Parser)]
#[command(name = "datagen", version)]
struct Args {
    /// Путь к config.toml (по умолчанию рядом с исполняемым файлом)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Куда записать документ (переопределяет output.path)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = shared::config::load_config(args.config.as_deref())?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.path));
    let records = config.records();

    generator::write_materials(&output, &records)?;

    tracing::info!("Archivo JSON creado: {}", output.display());
    Ok(())
}
