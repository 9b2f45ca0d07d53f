//! Ticker types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price observation for one symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Trading symbol (e.g., "BTCUSDT")
    pub symbol: String,
    /// Last price
    pub price: Decimal,
    /// Local time the response was decoded
    pub observed_at: DateTime<Utc>,
}

impl Observation {
    pub fn new(symbol: impl Into<String>, price: Decimal, observed_at: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            observed_at,
        }
    }
}

/// Element of the `ticker/price` response array
#[derive(Debug, Deserialize)]
pub(crate) struct TickerPrice {
    pub symbol: String,
    pub price: Decimal,
}
