//! coin-tape: snapshot Binance ticker prices into a local DuckDB table
//!
//! This library provides the components for:
//! - Encoding a symbol list into a `ticker/price` request URL
//! - Fetching and decoding prices as exact decimals
//! - Persisting observations to a DuckDB `price` table
//! - Querying and exporting stored prices to Parquet
//! - Configuration, CLI and logging

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod ticker;

pub use collector::{Collector, RunSummary};
pub use error::CollectError;
