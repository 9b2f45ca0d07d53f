//! Integration tests for the ticker client against a mock endpoint

use coin_tape::ticker::{PriceSource, TickerClient, TickerClientConfig, TICKER_PRICE_PATH};
use coin_tape::CollectError;
use rust_decimal_macros::dec;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, timeout: Duration) -> TickerClient {
    TickerClient::with_config(TickerClientConfig {
        base_url: server.uri(),
        timeout,
    })
    .unwrap()
}

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_fetch_decodes_prices() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TICKER_PRICE_PATH))
        .and(query_param("symbols", r#"["BTCUSDT","ETHUSDT"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"symbol":"BTCUSDT","price":"65000.12345678"},{"symbol":"ETHUSDT","price":"3100.00000000"}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Duration::from_secs(5));
    let before = chrono::Utc::now();
    let obs = client
        .fetch(&symbols(&["BTCUSDT", "ETHUSDT"]))
        .await
        .unwrap();

    assert_eq!(obs.len(), 2);
    assert_eq!(obs[0].symbol, "BTCUSDT");
    assert_eq!(obs[0].price, dec!(65000.12345678));
    assert_eq!(obs[1].price, dec!(3100));
    assert_eq!(obs[0].observed_at, obs[1].observed_at);
    assert!(obs[0].observed_at >= before - chrono::Duration::microseconds(1));
}

#[tokio::test]
async fn test_fetch_empty_symbols_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TICKER_PRICE_PATH))
        .and(query_param("symbols", "[]"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let obs = client(&server, Duration::from_secs(5))
        .fetch(&[])
        .await
        .unwrap();
    assert!(obs.is_empty());
}

#[tokio::test]
async fn test_fetch_timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TICKER_PRICE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = client(&server, Duration::from_millis(200))
        .fetch(&symbols(&["BTCUSDT"]))
        .await;

    assert!(matches!(result, Err(CollectError::Network(_))), "{:?}", result);
}

#[tokio::test]
async fn test_fetch_error_status_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TICKER_PRICE_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"code":-1121,"msg":"Invalid symbol."}"#),
        )
        .mount(&server)
        .await;

    let result = client(&server, Duration::from_secs(5))
        .fetch(&symbols(&["NOPE"]))
        .await;

    match result {
        Err(CollectError::Network(msg)) => assert!(msg.contains("Invalid symbol.")),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TICKER_PRICE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client(&server, Duration::from_secs(5))
        .fetch(&symbols(&["BTCUSDT"]))
        .await;

    tokio_test::assert_err!(&result);
    assert!(matches!(result, Err(CollectError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let client = TickerClient::with_config(TickerClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let result = client.fetch(&symbols(&["BTCUSDT"])).await;
    assert!(matches!(result, Err(CollectError::Network(_))));
}
