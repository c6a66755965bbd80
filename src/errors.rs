use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API error from {exchange}: {message}")]
    Api {
        exchange: &'static str,
        message: String,
    },

    #[error("invalid request URL: {0}")]
    Url(String),

    #[error("Unexpected data from exchange: {0}")]
    UnexpectedData(String),
}

/// A violated structural, field-level or ordering invariant.
/// Carries enough context to tell which exchange, method and symbol failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{exchange}] {method} {symbol}: {message}")]
pub struct AssertionError {
    pub exchange: String,
    pub method: String,
    pub symbol: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error(transparent)]
    Assertion(#[from] AssertionError),
}

impl CheckError {
    pub fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            Self::Assertion(e) => Some(e),
            Self::Exchange(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read skip file {path}: {source}")]
    SkipFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse skip file {path}: {source}")]
    SkipFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown exchange: {0}")]
    UnknownExchange(String),
}
