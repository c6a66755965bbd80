pub mod funding_rate_history;
pub mod shared;

use crate::errors::AssertionError;
use crate::models::{FundingRateHistory, SkippedProperties};

/// Diagnostic context shared by every assertion of a single check.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub exchange: &'a str,
    pub method: &'a str,
    pub symbol: &'a str,
    pub skipped: &'a SkippedProperties,
}

impl CheckContext<'_> {
    pub fn is_skipped(&self, property: &str) -> bool {
        self.skipped.is_skipped(property)
    }

    /// Builds an assertion failure tagged with this context.
    pub fn fail(&self, message: impl Into<String>) -> AssertionError {
        AssertionError {
            exchange: self.exchange.to_string(),
            method: self.method.to_string(),
            symbol: self.symbol.to_string(),
            message: message.into(),
        }
    }
}

/// The validations a funding-rate-history check delegates to. Swappable so
/// the check itself can be exercised against recording or failing doubles.
pub trait HistoryAssertions: Send + Sync {
    fn assert_non_empty_array(
        &self,
        ctx: &CheckContext<'_>,
        data: &[FundingRateHistory],
    ) -> Result<(), AssertionError>;

    fn validate_record(
        &self,
        ctx: &CheckContext<'_>,
        record: &FundingRateHistory,
    ) -> Result<(), AssertionError>;

    fn assert_timestamp_order(
        &self,
        ctx: &CheckContext<'_>,
        data: &[FundingRateHistory],
    ) -> Result<(), AssertionError>;
}

/// Default assertions, backed by the helpers in [`shared`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedAssertions {
    strict_timestamps: bool,
}

impl SharedAssertions {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, record timestamps must fall between 2009-01-03 and 2038-01-19.
    pub fn strict_timestamps(mut self, strict: bool) -> Self {
        self.strict_timestamps = strict;
        self
    }
}

impl HistoryAssertions for SharedAssertions {
    fn assert_non_empty_array(
        &self,
        ctx: &CheckContext<'_>,
        data: &[FundingRateHistory],
    ) -> Result<(), AssertionError> {
        shared::assert_non_empty_array(ctx, data)
    }

    fn validate_record(
        &self,
        ctx: &CheckContext<'_>,
        record: &FundingRateHistory,
    ) -> Result<(), AssertionError> {
        let bounds = self.strict_timestamps.then_some(shared::PLAUSIBLE_TIMESTAMPS);
        funding_rate_history::validate(ctx, record, bounds)
    }

    fn assert_timestamp_order(
        &self,
        ctx: &CheckContext<'_>,
        data: &[FundingRateHistory],
    ) -> Result<(), AssertionError> {
        shared::assert_timestamp_order(ctx, data)
    }
}
