//! Parquet export of stored observations

use crate::ticker::Observation;
use arrow::array::{ArrayRef, StringArray, TimestampMicrosecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::DateTime;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use rust_decimal::Decimal;
use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Price observation schema fields
pub fn price_schema() -> Schema {
    Schema::new(vec![
        Field::new(
            "observed_at",
            DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
            false,
        ),
        Field::new("symbol", DataType::Utf8, false),
        Field::new("price", DataType::Utf8, false), // Store as string for Decimal precision
    ])
}

/// Writes observations to Parquet files
pub struct ParquetExporter;

impl ParquetExporter {
    /// Write observations to `path`, creating parent directories
    ///
    /// Returns the number of rows written. An empty slice writes nothing.
    pub fn write(path: &Path, observations: &[Observation]) -> anyhow::Result<usize> {
        if observations.is_empty() {
            return Ok(0);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let schema = Arc::new(price_schema());
        let file = File::create(path)?;

        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

        let timestamps: Vec<i64> = observations
            .iter()
            .map(|o| o.observed_at.timestamp_micros())
            .collect();
        let symbols: Vec<&str> = observations.iter().map(|o| o.symbol.as_str()).collect();
        let prices: Vec<String> = observations.iter().map(|o| o.price.to_string()).collect();

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(TimestampMicrosecondArray::from(timestamps).with_timezone("UTC"))
                    as ArrayRef,
                Arc::new(StringArray::from(symbols)) as ArrayRef,
                Arc::new(StringArray::from(
                    prices.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
                )) as ArrayRef,
            ],
        )?;

        writer.write(&batch)?;
        writer.close()?;

        tracing::debug!(path = ?path, count = observations.len(), "Wrote observations to Parquet");

        Ok(observations.len())
    }

    /// Read observations back from a Parquet file
    pub fn read(path: &Path) -> anyhow::Result<Vec<Observation>> {
        let file = File::open(path)?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut observations = Vec::new();

        for batch_result in reader {
            let batch = batch_result?;

            let timestamps = batch
                .column(0)
                .as_any()
                .downcast_ref::<TimestampMicrosecondArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid observed_at column"))?;

            let symbols = batch
                .column(1)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid symbol column"))?;

            let prices = batch
                .column(2)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| anyhow::anyhow!("Invalid price column"))?;

            for i in 0..batch.num_rows() {
                let observed_at = DateTime::from_timestamp_micros(timestamps.value(i))
                    .ok_or_else(|| anyhow::anyhow!("Invalid observed_at"))?;

                observations.push(Observation {
                    symbol: symbols.value(i).to_string(),
                    price: Decimal::from_str(prices.value(i))?,
                    observed_at,
                });
            }
        }

        Ok(observations)
    }
}
