//! Price storage module
//!
//! DuckDB table for observations, plus Parquet export

mod duck;
mod parquet;

pub use self::parquet::{price_schema, ParquetExporter};
pub use duck::{PriceStore, MAX_SYMBOL_LEN, PRICE_SCALE};
