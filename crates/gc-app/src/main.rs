use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Charger la config
    let config = resolve_config(&cli)?;

    // 4. Lancer la conversion
    let written = pipeline::run(&cli.input, cli.output.as_deref(), &config)?;
    log::info!("Conversion terminée : {}", written.display());
    Ok(())
}

/// Resolve config: explicit --config file, otherwise defaults.
fn resolve_config(cli: &cli::Cli) -> Result<gc_core::config::ConvertConfig> {
    match cli.config {
        Some(ref path) => gc_core::config::load_config(path),
        None => Ok(gc_core::config::ConvertConfig::default()),
    }
}
