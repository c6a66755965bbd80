use super::{Exchange, endpoint, market_id, parse_rate, unify_symbol};
use crate::errors::ExchangeError;
use crate::models::{FundingRateHistory, iso8601};
use async_trait::async_trait;
use serde::Deserialize;

const BASE_URL: &str = "https://api.bybit.com";

#[derive(Debug, Deserialize)]
struct BybitResponse {
    #[serde(rename = "retCode")]
    ret_code: i32,

    #[serde(rename = "retMsg", default)]
    ret_msg: String,

    result: Option<BybitResult>,
}

#[derive(Debug, Deserialize)]
struct BybitResult {
    #[serde(default)]
    list: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct BybitFundingEntry {
    symbol: String,

    #[serde(rename = "fundingRate")]
    funding_rate: String,

    #[serde(rename = "fundingRateTimestamp")]
    funding_rate_timestamp: String,
}

pub struct Bybit {
    client: reqwest::Client,
    base_url: String,
}

impl Bybit {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Exchange for Bybit {
    fn name(&self) -> &'static str {
        "bybit"
    }

    async fn fetch_funding_rate_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<FundingRateHistory>, ExchangeError> {
        let id = market_id(symbol);
        let url = endpoint(
            &self.base_url,
            "/v5/market/funding/history",
            &[("category", "linear"), ("symbol", id.as_str())],
        )?;

        tracing::debug!("[{}] GET {url}", self.name());

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        // geo-blocks and gateway errors come back as HTML, not the usual envelope
        if !status.is_success() {
            return Err(ExchangeError::Api {
                exchange: self.name(),
                message: format!("HTTP {status}: {body}"),
            });
        }

        let response: BybitResponse = serde_json::from_str(&body)?;

        // Bybit signals errors via retCode, not just HTTP status
        if response.ret_code != 0 {
            return Err(ExchangeError::Api {
                exchange: self.name(),
                message: format!("retCode {}: {}", response.ret_code, response.ret_msg),
            });
        }

        let list = response.result.map(|r| r.list).unwrap_or_default();

        let mut history = list
            .into_iter()
            .map(|info| -> Result<FundingRateHistory, ExchangeError> {
                let entry: BybitFundingEntry = serde_json::from_value(info.clone())?;
                let funding_rate = parse_rate(&entry.funding_rate)?;
                let timestamp = entry.funding_rate_timestamp.parse::<i64>().map_err(|e| {
                    ExchangeError::UnexpectedData(format!(
                        "invalid fundingRateTimestamp {:?}: {e}",
                        entry.funding_rate_timestamp
                    ))
                })?;

                Ok(FundingRateHistory {
                    symbol: Some(unify_symbol(symbol, &entry.symbol)),
                    timestamp: Some(timestamp),
                    datetime: iso8601(timestamp),
                    funding_rate: Some(funding_rate),
                    info,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // list comes back newest first
        history.sort_by_key(|record| record.timestamp);
        Ok(history)
    }
}
