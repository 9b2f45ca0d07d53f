//! Export command implementation

use crate::config::Config;
use crate::store::{ParquetExporter, PriceStore};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output Parquet file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Only export this symbol
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Database file (overrides config)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

impl ExportArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let db = self.db.as_ref().unwrap_or(&config.store.path);
        let store = PriceStore::open(db)?;
        store.ensure_schema()?;

        let observations = store.observations(self.symbol.as_deref())?;
        let written = ParquetExporter::write(&self.output, &observations)?;

        tracing::info!(rows = written, output = ?self.output, "Exported prices");
        println!("Exported {} rows to {}", written, self.output.display());

        Ok(())
    }
}
