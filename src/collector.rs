//! Single collection run: fetch prices, then persist them

use crate::error::CollectError;
use crate::store::PriceStore;
use crate::ticker::PriceSource;
use tracing::Instrument;
use uuid::Uuid;

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Observations decoded from the response
    pub fetched: usize,
    /// Rows committed to the price table
    pub stored: usize,
}

/// Runs the fetch → store pipeline once
pub struct Collector<'a, S: PriceSource> {
    source: &'a S,
    store: &'a mut PriceStore,
}

impl<'a, S: PriceSource> Collector<'a, S> {
    pub fn new(source: &'a S, store: &'a mut PriceStore) -> Self {
        Self { source, store }
    }

    /// Ensure the schema, fetch one batch, and append it
    ///
    /// The first error ends the run. A failed fetch writes nothing and a
    /// failed insert rolls the whole batch back.
    pub async fn run(&mut self, symbols: &[String]) -> Result<RunSummary, CollectError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("collect", %run_id, symbols = symbols.len());

        async {
            self.store.ensure_schema()?;

            let observations = self.source.fetch(symbols).await?;
            let stored = self.store.append_all(&observations)?;

            let summary = RunSummary {
                fetched: observations.len(),
                stored,
            };
            tracing::info!(fetched = summary.fetched, stored = summary.stored, "Run complete");

            Ok::<_, CollectError>(summary)
        }
        .instrument(span)
        .await
    }
}
