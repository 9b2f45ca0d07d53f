//! Binance REST client for ticker prices
//!
//! One GET against `/api/v3/ticker/price` per fetch. The body is read to the
//! end before decoding so the connection is released on every path.

use super::request::build_request_url;
use super::types::{Observation, TickerPrice};
use super::PriceSource;
use crate::error::CollectError;
use crate::telemetry::{record_fetch, record_latency, LatencyMetric};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use reqwest::Client;
use std::time::{Duration, Instant};

/// Binance REST API base URL
pub const BINANCE_API_URL: &str = "https://api.binance.com";

/// Configuration for the ticker client
#[derive(Debug, Clone)]
pub struct TickerClientConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for TickerClientConfig {
    fn default() -> Self {
        Self {
            base_url: BINANCE_API_URL.to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

/// Client for the ticker price endpoint
pub struct TickerClient {
    config: TickerClientConfig,
    client: Client,
}

impl TickerClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, CollectError> {
        Self::with_config(TickerClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: TickerClientConfig) -> Result<Self, CollectError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CollectError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn fetch_prices(&self, symbols: &[String]) -> Result<Vec<Observation>, CollectError> {
        let url = build_request_url(&self.config.base_url, symbols)?;

        tracing::debug!(url = %url, "Fetching ticker prices");

        let started = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        record_latency(LatencyMetric::Fetch, started.elapsed());

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(CollectError::Network(format!(
                "ticker API error: {} - {}",
                status, text
            )));
        }

        let observed_at = Utc::now().trunc_subsecs(6);
        let observations = decode_prices(&body, observed_at)?;

        tracing::info!(
            requested = symbols.len(),
            received = observations.len(),
            "Fetched ticker prices"
        );

        Ok(observations)
    }
}

#[async_trait]
impl PriceSource for TickerClient {
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<Observation>, CollectError> {
        let result = self.fetch_prices(symbols).await;
        record_fetch(&result);
        result
    }
}

/// Decode a `ticker/price` response body
///
/// Every observation in the batch is stamped with `observed_at`.
pub fn decode_prices(
    body: &[u8],
    observed_at: DateTime<Utc>,
) -> Result<Vec<Observation>, CollectError> {
    let prices: Vec<TickerPrice> = serde_json::from_slice(body)
        .map_err(|e| CollectError::Decode(format!("invalid ticker response: {}", e)))?;

    prices
        .into_iter()
        .map(|p| {
            if p.symbol.is_empty() {
                return Err(CollectError::Decode("empty symbol in response".to_string()));
            }
            if p.price.is_sign_negative() && !p.price.is_zero() {
                return Err(CollectError::Decode(format!(
                    "negative price for {}: {}",
                    p.symbol, p.price
                )));
            }
            Ok(Observation {
                symbol: p.symbol,
                price: p.price,
                observed_at,
            })
        })
        .collect()
}
