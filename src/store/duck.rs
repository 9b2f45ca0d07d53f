//! DuckDB-backed price table

use crate::error::CollectError;
use crate::telemetry::{record_latency, record_rows_written, LatencyMetric};
use crate::ticker::Observation;
use chrono::DateTime;
use duckdb::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

/// Width of the `symbol` column
pub const MAX_SYMBOL_LEN: usize = 10;

/// Fractional digits of the `price` column
pub const PRICE_SCALE: u32 = 8;

const CREATE_PRICE_TABLE: &str = "CREATE TABLE IF NOT EXISTS price (
    symbol VARCHAR(10) NOT NULL,
    price DECIMAL(20, 8) NOT NULL,
    observed_at TIMESTAMP NOT NULL,
    PRIMARY KEY (symbol, observed_at)
)";

const INSERT_PRICE: &str = "INSERT INTO price (symbol, price, observed_at)
    VALUES (?, CAST(? AS DECIMAL(20, 8)), CAST(? AS TIMESTAMP))";

const SELECT_COLUMNS: &str = "SELECT symbol, CAST(price AS VARCHAR), epoch_us(observed_at) FROM price";

/// Local price table
///
/// Owns one connection for its lifetime. The connection closes on drop.
pub struct PriceStore {
    conn: Connection,
    extensions: Vec<String>,
}

impl PriceStore {
    /// Open (or create) a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CollectError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            CollectError::Storage(format!("failed to open {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "Opened price database");

        Ok(Self {
            conn,
            extensions: Vec::new(),
        })
    }

    /// Open a transient in-memory database
    pub fn open_in_memory() -> Result<Self, CollectError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn,
            extensions: Vec::new(),
        })
    }

    /// Extensions to install and load during `ensure_schema`
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Create the price table if it does not exist
    ///
    /// Extension loading runs afterwards and only logs on failure.
    pub fn ensure_schema(&self) -> Result<(), CollectError> {
        self.conn
            .execute_batch(CREATE_PRICE_TABLE)
            .map_err(|e| CollectError::Storage(format!("failed to create price table: {}", e)))?;

        for ext in &self.extensions {
            self.load_extension(ext);
        }

        Ok(())
    }

    fn load_extension(&self, name: &str) {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            tracing::warn!(extension = name, "Skipping extension with invalid name");
            return;
        }

        match self
            .conn
            .execute_batch(&format!("INSTALL {name}; LOAD {name};"))
        {
            Ok(()) => tracing::debug!(extension = name, "Loaded DuckDB extension"),
            Err(e) => tracing::warn!(extension = name, error = %e, "Failed to load DuckDB extension"),
        }
    }

    /// Insert a single observation
    pub fn append(&self, observation: &Observation) -> Result<(), CollectError> {
        insert(&self.conn, observation)
    }

    /// Insert a batch, in order, as one transaction
    ///
    /// Either every row is committed or none is.
    pub fn append_all(&mut self, observations: &[Observation]) -> Result<usize, CollectError> {
        if observations.is_empty() {
            return Ok(0);
        }

        let started = Instant::now();
        let tx = self.conn.transaction()?;
        for observation in observations {
            insert(&tx, observation)?;
        }
        tx.commit()
            .map_err(|e| CollectError::Storage(format!("failed to commit batch: {}", e)))?;

        record_latency(LatencyMetric::Store, started.elapsed());
        record_rows_written(observations.len());
        tracing::debug!(rows = observations.len(), "Appended observations");

        Ok(observations.len())
    }

    /// Most recent observation per symbol, ordered by symbol
    pub fn latest(&self) -> Result<Vec<Observation>, CollectError> {
        let sql = format!(
            "{SELECT_COLUMNS}
             QUALIFY row_number() OVER (PARTITION BY symbol ORDER BY observed_at DESC) = 1
             ORDER BY symbol"
        );
        self.query(&sql, None)
    }

    /// All stored observations, optionally for one symbol, oldest first
    pub fn observations(&self, symbol: Option<&str>) -> Result<Vec<Observation>, CollectError> {
        match symbol {
            Some(s) => self.query(
                &format!("{SELECT_COLUMNS} WHERE symbol = ? ORDER BY observed_at, symbol"),
                Some(s),
            ),
            None => self.query(
                &format!("{SELECT_COLUMNS} ORDER BY observed_at, symbol"),
                None,
            ),
        }
    }

    /// Number of stored rows
    pub fn count(&self) -> Result<u64, CollectError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM price", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn query(&self, sql: &str, symbol: Option<&str>) -> Result<Vec<Observation>, CollectError> {
        let mut stmt = self.conn.prepare(sql)?;

        let rows = match symbol {
            Some(s) => stmt
                .query_map(params![s], read_row)?
                .collect::<Result<Vec<_>, _>>()?,
            None => stmt.query_map([], read_row)?.collect::<Result<Vec<_>, _>>()?,
        };

        rows.into_iter()
            .map(|(symbol, price, micros)| {
                let price = Decimal::from_str(&price).map_err(|e| {
                    CollectError::Storage(format!("invalid stored price {}: {}", price, e))
                })?;
                let observed_at = DateTime::from_timestamp_micros(micros).ok_or_else(|| {
                    CollectError::Storage(format!("invalid stored timestamp {}", micros))
                })?;
                Ok(Observation {
                    symbol,
                    price,
                    observed_at,
                })
            })
            .collect()
    }
}

fn read_row(row: &duckdb::Row<'_>) -> duckdb::Result<(String, String, i64)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn insert(conn: &Connection, observation: &Observation) -> Result<(), CollectError> {
    if observation.symbol.chars().count() > MAX_SYMBOL_LEN {
        return Err(CollectError::Storage(format!(
            "symbol {} exceeds {} characters",
            observation.symbol, MAX_SYMBOL_LEN
        )));
    }

    // The column cast would round anything finer than PRICE_SCALE
    if observation.price.normalize().scale() > PRICE_SCALE {
        return Err(CollectError::Storage(format!(
            "price {} for {} has more than {} fractional digits",
            observation.price, observation.symbol, PRICE_SCALE
        )));
    }

    conn.execute(
        INSERT_PRICE,
        params![
            observation.symbol,
            observation.price.to_string(),
            observation.observed_at.naive_utc(),
        ],
    )
    .map_err(|e| {
        CollectError::Storage(format!(
            "failed to insert {} at {}: {}",
            observation.symbol, observation.observed_at, e
        ))
    })?;

    Ok(())
}
