use crate::errors::{ConfigError, ExchangeError};
use crate::models::FundingRateHistory;
use async_trait::async_trait;

pub mod binance;
pub mod bybit;

pub use binance::Binance;
pub use bybit::Bybit;

#[async_trait]
pub trait Exchange: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetches historical funding rates for a unified symbol (e.g. "BTC/USDT:USDT"),
    /// normalized and ordered oldest first.
    async fn fetch_funding_rate_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<FundingRateHistory>, ExchangeError>;
}

/// Builds a connector by its lowercase name.
pub fn by_name(name: &str, client: reqwest::Client) -> Result<Box<dyn Exchange>, ConfigError> {
    match name.trim().to_lowercase().as_str() {
        "binance" => Ok(Box::new(Binance::with_client(client))),
        "bybit" => Ok(Box::new(Bybit::with_client(client))),
        other => Err(ConfigError::UnknownExchange(other.to_string())),
    }
}

/// Venue market id for a unified symbol: "BTC/USDT:USDT" -> "BTCUSDT".
pub fn market_id(symbol: &str) -> String {
    let pair = symbol.split(':').next().unwrap_or(symbol);
    pair.replace('/', "").to_uppercase()
}

/// Maps a venue market id back to the symbol the caller asked for,
/// leaving ids of other markets untouched.
pub(crate) fn unify_symbol(requested: &str, returned_id: &str) -> String {
    if market_id(requested) == returned_id {
        requested.to_string()
    } else {
        returned_id.to_string()
    }
}

/// Joins `base` and `path` and percent-encodes the query parameters.
pub(crate) fn endpoint(
    base: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<reqwest::Url, ExchangeError> {
    reqwest::Url::parse_with_params(&format!("{base}{path}"), params)
        .map_err(|e| ExchangeError::Url(format!("{base}{path}: {e}")))
}

pub(crate) fn parse_rate(raw: &str) -> Result<f64, ExchangeError> {
    raw.parse::<f64>()
        .map_err(|e| ExchangeError::UnexpectedData(format!("invalid funding rate {raw:?}: {e}")))
}
