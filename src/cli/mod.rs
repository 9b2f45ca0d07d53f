//! CLI interface for coin-tape
//!
//! Provides subcommands for:
//! - `collect`: Fetch current prices and append them to the price table
//! - `latest`: Show the most recent stored price per symbol
//! - `export`: Write stored prices to a Parquet file
//! - `config`: Show the effective configuration

mod collect;
mod export;
mod latest;

pub use collect::CollectArgs;
pub use export::ExportArgs;
pub use latest::LatestArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coin-tape")]
#[command(about = "Snapshot Binance ticker prices into a local DuckDB table")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch current prices and store them
    Collect(CollectArgs),
    /// Show the most recent stored price per symbol
    Latest(LatestArgs),
    /// Export stored prices to Parquet
    Export(ExportArgs),
    /// Show configuration
    Config,
}
