use super::CheckContext;
use super::shared::{self, TimestampBounds};
use crate::errors::AssertionError;
use crate::models::FundingRateHistory;

/// Funding rates are fractions per interval; anything past ±100 is a parsing bug.
const MAX_ABS_FUNDING_RATE: f64 = 100.0;

/// Validates a single funding-rate-history record: required fields, symbol
/// match, timestamp/datetime consistency and a sane rate range.
pub fn validate(
    ctx: &CheckContext<'_>,
    record: &FundingRateHistory,
    bounds: Option<TimestampBounds>,
) -> Result<(), AssertionError> {
    shared::assert_present(ctx, "symbol", record.symbol.as_ref())?;
    shared::assert_present(ctx, "timestamp", record.timestamp.as_ref())?;
    shared::assert_present(ctx, "fundingRate", record.funding_rate.as_ref())?;

    shared::assert_symbol(ctx, "symbol", record.symbol.as_deref())?;
    shared::assert_timestamp_and_datetime(
        ctx,
        record.timestamp,
        record.datetime.as_deref(),
        bounds,
    )?;

    shared::assert_greater(ctx, "fundingRate", record.funding_rate, -MAX_ABS_FUNDING_RATE)?;
    shared::assert_less(ctx, "fundingRate", record.funding_rate, MAX_ABS_FUNDING_RATE)?;

    Ok(())
}
