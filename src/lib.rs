pub mod assertions;
pub mod checks;
pub mod config;
pub mod errors;
pub mod exchanges;
pub mod models;
pub mod runner;

pub use assertions::{CheckContext, HistoryAssertions, SharedAssertions};
pub use checks::test_fetch_funding_rate_history;
pub use errors::{AssertionError, CheckError, ConfigError, ExchangeError};
pub use exchanges::Exchange;
pub use models::{FundingRateHistory, SkipFile, SkippedProperties};
pub use runner::{CheckOutcome, Report, Runner};
