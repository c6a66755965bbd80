use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub exchanges: Vec<String>,
    pub symbols: Vec<String>,
    pub skip_tests_path: Option<PathBuf>,
    pub http_timeout: Duration,
    pub strict_timestamps: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads every setting through `lookup`, so tests don't touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // default to the two built-in connectors
        let exchanges = list(
            &lookup("EXCHANGES").unwrap_or_else(|| "binance,bybit".to_string()),
            str::to_lowercase,
        );

        let symbols = list(
            &lookup("SYMBOLS").unwrap_or_else(|| "BTC/USDT:USDT".to_string()),
            str::to_uppercase,
        );

        if exchanges.is_empty() {
            return Err(invalid("EXCHANGES", "", "at least one exchange is required"));
        }
        if symbols.is_empty() {
            return Err(invalid("SYMBOLS", "", "at least one symbol is required"));
        }

        let skip_tests_path = lookup("SKIP_TESTS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| invalid("HTTP_TIMEOUT_SECS", &raw, "must be a positive integer"))?,
            None => Duration::from_secs(10),
        };

        let strict_timestamps = match lookup("STRICT_TIMESTAMPS") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid("STRICT_TIMESTAMPS", &raw, "must be true or false")),
            },
            None => true,
        };

        Ok(Self {
            exchanges,
            symbols,
            skip_tests_path,
            http_timeout,
            strict_timestamps,
        })
    }
}

fn list(raw: &str, normalize: fn(&str) -> String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(normalize)
        .collect()
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
