//! Integration tests for configuration loading

use coin_tape::config::Config;
use std::path::PathBuf;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();

    assert_eq!(config.ticker.base_url, "https://api.binance.com");
    assert_eq!(config.ticker.symbols.len(), 4);
    assert_eq!(config.ticker.timeout_secs, 20);
    assert_eq!(config.store.path, PathBuf::from("mydb.db"));
}

#[test]
fn test_config_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ticker]\nsymbols = [\"BTCUSDT\"]\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.ticker.symbols, vec!["BTCUSDT"]);
    assert_eq!(config.store.extensions, vec!["delta"]);
}
