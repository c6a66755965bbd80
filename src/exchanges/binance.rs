use super::{Exchange, endpoint, market_id, parse_rate, unify_symbol};
use crate::errors::ExchangeError;
use crate::models::{FundingRateHistory, iso8601};
use async_trait::async_trait;
use serde::Deserialize;

const BASE_URL: &str = "https://fapi.binance.com";

/// One entry of Binance's /fapi/v1/fundingRate response
#[derive(Debug, Deserialize)]
struct FundingRateEntry {
    symbol: String,

    #[serde(rename = "fundingTime")]
    funding_time: i64,

    #[serde(rename = "fundingRate")]
    funding_rate: String,
}

/// Binance reports failures as {"code": -1121, "msg": "Invalid symbol."}
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: i64,
    msg: String,
}

pub struct Binance {
    client: reqwest::Client,
    base_url: String,
}

impl Binance {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Points the connector at another host (testnet or a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Exchange for Binance {
    fn name(&self) -> &'static str {
        "binance"
    }

    /// Hits the fundingRate endpoint, which already returns entries oldest first,
    /// and maps each one into the unified FundingRateHistory model.
    async fn fetch_funding_rate_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<FundingRateHistory>, ExchangeError> {
        let id = market_id(symbol);
        let url = endpoint(
            &self.base_url,
            "/fapi/v1/fundingRate",
            &[("symbol", id.as_str())],
        )?;

        tracing::debug!("[{}] GET {url}", self.name());

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => format!("code {}: {}", err.code, err.msg),
                Err(_) => format!("HTTP {status}: {body}"),
            };
            return Err(ExchangeError::Api {
                exchange: self.name(),
                message,
            });
        }

        let raw: Vec<serde_json::Value> = serde_json::from_str(&body)?;

        raw.into_iter()
            .map(|info| -> Result<FundingRateHistory, ExchangeError> {
                let entry: FundingRateEntry = serde_json::from_value(info.clone())?;
                let funding_rate = parse_rate(&entry.funding_rate)?;

                Ok(FundingRateHistory {
                    symbol: Some(unify_symbol(symbol, &entry.symbol)),
                    timestamp: Some(entry.funding_time),
                    datetime: iso8601(entry.funding_time),
                    funding_rate: Some(funding_rate),
                    info,
                })
            })
            .collect()
    }
}
