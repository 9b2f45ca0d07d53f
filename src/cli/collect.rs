//! Collect command implementation

use crate::collector::Collector;
use crate::config::Config;
use crate::store::PriceStore;
use crate::ticker::TickerClient;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Symbols to fetch, comma separated (overrides config)
    #[arg(short, long, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// Database file (overrides config)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl CollectArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let symbols = self
            .symbols
            .clone()
            .unwrap_or_else(|| config.ticker.symbols.clone());
        let db = self.db.as_ref().unwrap_or(&config.store.path);

        let client = TickerClient::with_config(config.ticker.client_config())?;
        let mut store = PriceStore::open(db)?.with_extensions(config.store.extensions.clone());

        let summary = Collector::new(&client, &mut store)
            .run(&symbols)
            .await
            .with_context(|| format!("collection into {} failed", db.display()))?;

        println!("Stored {} of {} prices in {}", summary.stored, summary.fetched, db.display());

        Ok(())
    }
}
