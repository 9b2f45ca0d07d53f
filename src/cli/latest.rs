//! Latest command implementation

use crate::config::Config;
use crate::store::PriceStore;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LatestArgs {
    /// Database file (overrides config)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl LatestArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let db = self.db.as_ref().unwrap_or(&config.store.path);
        let store = PriceStore::open(db)?;
        store.ensure_schema()?;

        let latest = store.latest()?;
        if latest.is_empty() {
            println!("No prices stored in {}", db.display());
            return Ok(());
        }

        for obs in latest {
            println!(
                "{:<10} {:>22} {}",
                obs.symbol,
                obs.price,
                obs.observed_at.format("%Y-%m-%d %H:%M:%S%.6f")
            );
        }

        Ok(())
    }
}
