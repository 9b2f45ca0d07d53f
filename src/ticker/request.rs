//! Request URL construction for the ticker price endpoint

use crate::error::CollectError;
use reqwest::Url;

/// Path of the multi-symbol ticker price endpoint
pub const TICKER_PRICE_PATH: &str = "/api/v3/ticker/price";

/// Serialize the symbol list as a JSON array, e.g. `["BTCUSDT","ETHUSDT"]`
pub fn encode_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<String, CollectError> {
    let symbols: Vec<&str> = symbols.iter().map(|s| s.as_ref()).collect();
    serde_json::to_string(&symbols)
        .map_err(|e| CollectError::Encoding(format!("failed to serialize symbols: {}", e)))
}

/// Build the full request URL for the given symbols
///
/// The JSON-encoded list is form-urlencoded into the `symbols` query
/// parameter, so brackets, quotes and commas are percent-escaped.
pub fn build_request_url<S: AsRef<str>>(base_url: &str, symbols: &[S]) -> Result<Url, CollectError> {
    let encoded = encode_symbols(symbols)?;
    let endpoint = format!("{}{}", base_url.trim_end_matches('/'), TICKER_PRICE_PATH);

    let mut url = Url::parse(&endpoint)
        .map_err(|e| CollectError::Encoding(format!("invalid base URL {}: {}", base_url, e)))?;
    url.query_pairs_mut().append_pair("symbols", &encoded);

    Ok(url)
}
