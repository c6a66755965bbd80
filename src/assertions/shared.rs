//! Generic assertions reusable by any unified-method check.

use super::CheckContext;
use crate::errors::AssertionError;
use crate::models::{Timestamped, iso8601};

/// Open interval of timestamps (ms) an exchange can plausibly return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampBounds {
    pub min_exclusive: i64,
    pub max_exclusive: i64,
}

/// Genesis block (2009-01-03) to the 32-bit rollover (2038-01-19).
pub const PLAUSIBLE_TIMESTAMPS: TimestampBounds = TimestampBounds {
    min_exclusive: 1_230_940_800_000,
    max_exclusive: 2_147_483_648_000,
};

pub fn assert_non_empty_array<T>(ctx: &CheckContext<'_>, data: &[T]) -> Result<(), AssertionError> {
    if ctx.is_skipped("emptyResponse") || !data.is_empty() {
        return Ok(());
    }

    Err(ctx.fail(
        "response is expected to be a non-empty array (skip \"emptyResponse\" to allow empty responses)",
    ))
}

/// Items must be non-decreasing by timestamp. Pairs with a missing
/// timestamp on either side are not compared.
pub fn assert_timestamp_order<T: Timestamped>(
    ctx: &CheckContext<'_>,
    data: &[T],
) -> Result<(), AssertionError> {
    for (index, pair) in data.windows(2).enumerate() {
        if let (Some(current), Some(next)) = (pair[0].timestamp(), pair[1].timestamp()) {
            if current > next {
                return Err(ctx.fail(format!(
                    "must return an ascending sorted array of items by timestamp, \
                     but {current} at index {index} is opposite with its next {next}"
                )));
            }
        }
    }

    Ok(())
}

/// Required property must be present unless skipped.
pub fn assert_present<T>(
    ctx: &CheckContext<'_>,
    property: &str,
    value: Option<&T>,
) -> Result<(), AssertionError> {
    if value.is_none() && !ctx.is_skipped(property) {
        return Err(ctx.fail(format!("\"{property}\" key is missing from structure")));
    }
    Ok(())
}

pub fn assert_symbol(
    ctx: &CheckContext<'_>,
    property: &str,
    actual: Option<&str>,
) -> Result<(), AssertionError> {
    if ctx.is_skipped(property) {
        return Ok(());
    }

    match actual {
        Some(actual) if actual != ctx.symbol => Err(ctx.fail(format!(
            "\"{property}\" is expected to be {:?} but got {actual:?}",
            ctx.symbol
        ))),
        _ => Ok(()),
    }
}

pub fn assert_timestamp_and_datetime(
    ctx: &CheckContext<'_>,
    timestamp: Option<i64>,
    datetime: Option<&str>,
    bounds: Option<TimestampBounds>,
) -> Result<(), AssertionError> {
    let Some(ts) = timestamp else {
        if datetime.is_some() && !ctx.is_skipped("datetime") {
            return Err(ctx.fail("datetime is set but timestamp is missing"));
        }
        return Ok(());
    };

    if !ctx.is_skipped("timestamp") {
        if let Some(bounds) = bounds {
            if ts <= bounds.min_exclusive || ts >= bounds.max_exclusive {
                return Err(ctx.fail(format!(
                    "timestamp {ts} is outside the plausible range ({}, {})",
                    bounds.min_exclusive, bounds.max_exclusive
                )));
            }
        }
    }

    if ctx.is_skipped("datetime") {
        return Ok(());
    }

    if let Some(dt) = datetime {
        let expected = iso8601(ts);
        if expected.as_deref() != Some(dt) {
            return Err(ctx.fail(format!(
                "datetime {dt:?} is not the iso8601 of timestamp {ts} ({expected:?})"
            )));
        }
    }

    Ok(())
}

pub fn assert_greater(
    ctx: &CheckContext<'_>,
    property: &str,
    value: Option<f64>,
    than: f64,
) -> Result<(), AssertionError> {
    match value {
        Some(v) if !ctx.is_skipped(property) && (v.is_nan() || v <= than) => Err(ctx.fail(format!(
            "\"{property}\" is expected to be > {than}, but got {v}"
        ))),
        _ => Ok(()),
    }
}

pub fn assert_less(
    ctx: &CheckContext<'_>,
    property: &str,
    value: Option<f64>,
    than: f64,
) -> Result<(), AssertionError> {
    match value {
        Some(v) if !ctx.is_skipped(property) && (v.is_nan() || v >= than) => Err(ctx.fail(format!(
            "\"{property}\" is expected to be < {than}, but got {v}"
        ))),
        _ => Ok(()),
    }
}
