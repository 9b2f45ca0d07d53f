//! Run metrics
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! embedding process installs a recorder.

use crate::error::CollectError;
use crate::ticker::Observation;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Ticker price request, send to last body byte
    Fetch,
    /// Batch insert into the price table
    Store,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::Fetch => "cointape_fetch_latency_ms",
            LatencyMetric::Store => "cointape_store_latency_ms",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let name = metric.name();
    metrics::histogram!(name).record(duration.as_secs_f64() * 1000.0);

    tracing::debug!(
        metric = name,
        value_ms = duration.as_millis() as u64,
        "Recording latency"
    );
}

/// Record the outcome of one fetch
pub fn record_fetch(result: &Result<Vec<Observation>, CollectError>) {
    match result {
        Ok(observations) => {
            metrics::counter!("cointape_observations_fetched_total")
                .increment(observations.len() as u64);
        }
        Err(e) => {
            metrics::counter!("cointape_fetch_errors_total", "kind" => e.kind()).increment(1);
        }
    }
}

/// Record rows committed to the price table
pub fn record_rows_written(count: usize) {
    metrics::counter!("cointape_rows_written_total").increment(count as u64);
}
