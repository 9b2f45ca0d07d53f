use anyhow::Context;
use clap::Parser;
use coin_tape::cli::{Cli, Commands};
use coin_tape::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; only a missing file falls back to defaults
    let loaded = Config::load_optional(&cli.config)
        .with_context(|| format!("Invalid configuration in {}", cli.config))?;
    let missing = loaded.is_none();
    let config = loaded.unwrap_or_default();

    // Initialize telemetry
    coin_tape::telemetry::init_telemetry(&config.telemetry)?;

    if missing {
        tracing::warn!(path = %cli.config, "Config file not found, using defaults");
    }

    match cli.command {
        Commands::Collect(args) => {
            tracing::info!("Starting price collection");
            args.execute(&config).await?;
        }
        Commands::Latest(args) => args.execute(&config)?,
        Commands::Export(args) => args.execute(&config)?,
        Commands::Config => {
            println!("Current configuration:");
            println!("  Ticker: {}", config.ticker.base_url);
            println!("  Symbols: {}", config.ticker.symbols.join(","));
            println!("  Timeout: {}s", config.ticker.timeout_secs);
            println!("  Database: {}", config.store.path.display());
            println!("  Extensions: {}", config.store.extensions.join(","));
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
