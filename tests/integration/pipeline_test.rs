//! End-to-end tests: mock endpoint into an on-disk price table

use coin_tape::store::{ParquetExporter, PriceStore};
use coin_tape::ticker::{TickerClient, TickerClientConfig, TICKER_PRICE_PATH};
use coin_tape::{CollectError, Collector, RunSummary};
use rust_decimal_macros::dec;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
    {"symbol":"BTCUSDT","price":"65000.12345678"},
    {"symbol":"ETHUSDT","price":"3100.50000000"},
    {"symbol":"SOLUSDT","price":"150.25000000"},
    {"symbol":"DOGEUSDT","price":"0.12345678"}
]"#;

fn symbols() -> Vec<String> {
    ["BTCUSDT", "ETHUSDT", "SOLUSDT", "DOGEUSDT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

async fn mock_server(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TICKER_PRICE_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer, timeout: Duration) -> TickerClient {
    TickerClient::with_config(TickerClientConfig {
        base_url: server.uri(),
        timeout,
    })
    .unwrap()
}

#[tokio::test]
async fn test_collect_persists_batch() {
    let server = mock_server(ResponseTemplate::new(200).set_body_string(BODY)).await;
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("prices.db");

    {
        let client = client(&server, Duration::from_secs(5));
        let mut store = PriceStore::open(&db).unwrap();
        let summary = Collector::new(&client, &mut store)
            .run(&symbols())
            .await
            .unwrap();
        assert_eq!(summary, RunSummary { fetched: 4, stored: 4 });
    }

    // Reopen to check the rows survived the connection closing
    let store = PriceStore::open(&db).unwrap();
    let latest = store.latest().unwrap();
    assert_eq!(latest.len(), 4);
    assert_eq!(latest[0].symbol, "BTCUSDT");
    assert_eq!(latest[0].price, dec!(65000.12345678));
    assert_eq!(latest[1].symbol, "DOGEUSDT");
    assert_eq!(latest[1].price, dec!(0.12345678));
    assert!(latest.iter().all(|o| o.observed_at == latest[0].observed_at));
}

#[tokio::test]
async fn test_collect_twice_appends() {
    let server = mock_server(ResponseTemplate::new(200).set_body_string(BODY)).await;
    let client = client(&server, Duration::from_secs(5));
    let mut store = PriceStore::open_in_memory().unwrap();

    Collector::new(&client, &mut store)
        .run(&symbols())
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    Collector::new(&client, &mut store)
        .run(&symbols())
        .await
        .unwrap();

    assert_eq!(store.count().unwrap(), 8);
    assert_eq!(store.observations(Some("BTCUSDT")).unwrap().len(), 2);
}

#[tokio::test]
async fn test_timeout_writes_no_rows() {
    let server = mock_server(
        ResponseTemplate::new(200)
            .set_body_string(BODY)
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let client = client(&server, Duration::from_millis(200));
    let mut store = PriceStore::open_in_memory().unwrap();

    let result = Collector::new(&client, &mut store).run(&symbols()).await;

    assert!(matches!(result, Err(CollectError::Network(_))));
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_rejected_batch_writes_no_rows() {
    let body = r#"[
        {"symbol":"BTCUSDT","price":"65000.1"},
        {"symbol":"BTCUSDT","price":"65000.2"}
    ]"#;
    let server = mock_server(ResponseTemplate::new(200).set_body_string(body)).await;
    let client = client(&server, Duration::from_secs(5));
    let mut store = PriceStore::open_in_memory().unwrap();

    let result = Collector::new(&client, &mut store).run(&symbols()).await;

    assert!(matches!(result, Err(CollectError::Storage(_))));
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_collect_then_export() {
    let server = mock_server(ResponseTemplate::new(200).set_body_string(BODY)).await;
    let client = client(&server, Duration::from_secs(5));
    let mut store = PriceStore::open_in_memory().unwrap();
    Collector::new(&client, &mut store)
        .run(&symbols())
        .await
        .unwrap();

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("btc.parquet");
    let rows = store.observations(Some("BTCUSDT")).unwrap();
    assert_eq!(ParquetExporter::write(&out, &rows).unwrap(), 1);

    let read = ParquetExporter::read(&out).unwrap();
    assert_eq!(read, rows);
    assert_eq!(read[0].price, dec!(65000.12345678));
}
