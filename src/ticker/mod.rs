//! Ticker price module
//!
//! Fetches current prices for a list of symbols from the Binance
//! `ticker/price` REST endpoint

mod client;
mod request;
mod types;

pub use client::{decode_prices, TickerClient, TickerClientConfig, BINANCE_API_URL};
pub use request::{build_request_url, encode_symbols, TICKER_PRICE_PATH};
pub use types::Observation;

use crate::error::CollectError;
use async_trait::async_trait;

/// Trait for price sources
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch one batch of observations for the given symbols
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<Observation>, CollectError>;
}
