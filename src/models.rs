use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// One historical funding-rate observation in the unified shape.
/// Every field but `info` is optional so that incomplete exchange
/// responses can still be represented and then rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingRateHistory {
    /// Raw exchange payload the record was parsed from.
    #[serde(default)]
    pub info: serde_json::Value,
    pub symbol: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: Option<i64>,
    pub datetime: Option<String>,
    pub funding_rate: Option<f64>,
}

impl FundingRateHistory {
    /// Builds a record from its three core fields, deriving `datetime`.
    pub fn new(symbol: impl Into<String>, timestamp: i64, funding_rate: f64) -> Self {
        Self {
            info: serde_json::Value::Null,
            symbol: Some(symbol.into()),
            timestamp: Some(timestamp),
            datetime: iso8601(timestamp),
            funding_rate: Some(funding_rate),
        }
    }
}

/// Anything that can be checked for chronological order.
pub trait Timestamped {
    fn timestamp(&self) -> Option<i64>;
}

impl Timestamped for FundingRateHistory {
    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }
}

/// Renders a millisecond timestamp as e.g. "2021-11-30T00:00:00.000Z".
pub fn iso8601(timestamp_ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

/// Either a plain flag or a human-readable reason. A reason always means "skip".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkipIndicator {
    Flag(bool),
    Reason(String),
}

impl SkipIndicator {
    pub fn is_skipped(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Reason(_) => true,
        }
    }
}

/// Per-exchange exemptions from field validation, keyed by property name
/// (`"symbol"`, `"fundingRate"`, ...). `"emptyResponse"` exempts a call
/// from the non-empty check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkippedProperties(HashMap<String, SkipIndicator>);

impl SkippedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>) -> Self {
        self.insert(property, SkipIndicator::Flag(true));
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, indicator: SkipIndicator) {
        self.0.insert(property.into(), indicator);
    }

    pub fn is_skipped(&self, property: &str) -> bool {
        self.0.get(property).is_some_and(SkipIndicator::is_skipped)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SkippedProperties {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |skipped, property| skipped.with(property))
    }
}

/// Skip configuration for every exchange and unified method, in the shape
/// `{ "binance": { "fetchFundingRateHistory": { "datetime": true } } }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SkipFile(HashMap<String, HashMap<String, SkippedProperties>>);

impl SkipFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SkipFileRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::SkipFileParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Skipped properties for one exchange/method pair (empty if none configured).
    pub fn for_method(&self, exchange: &str, method: &str) -> SkippedProperties {
        self.0
            .get(exchange)
            .and_then(|methods| methods.get(method))
            .cloned()
            .unwrap_or_default()
    }
}
