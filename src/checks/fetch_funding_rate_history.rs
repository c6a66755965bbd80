use crate::assertions::{CheckContext, HistoryAssertions};
use crate::errors::CheckError;
use crate::exchanges::Exchange;
use crate::models::SkippedProperties;

/// Unified method name used in diagnostics and skip configuration.
pub const METHOD: &str = "fetchFundingRateHistory";

/// Fetches the funding-rate history for `symbol` and checks that it is
/// non-empty, that every record is well formed, and that records are
/// ordered by timestamp. Any fetch or assertion failure is returned as-is.
pub async fn test_fetch_funding_rate_history(
    exchange: &dyn Exchange,
    assertions: &dyn HistoryAssertions,
    skipped: &SkippedProperties,
    symbol: &str,
) -> Result<bool, CheckError> {
    let history = exchange.fetch_funding_rate_history(symbol).await?;

    tracing::debug!(
        "[{}] {METHOD} {symbol} returned {} records",
        exchange.name(),
        history.len()
    );

    let ctx = CheckContext {
        exchange: exchange.name(),
        method: METHOD,
        symbol,
        skipped,
    };

    assertions.assert_non_empty_array(&ctx, &history)?;
    for record in &history {
        assertions.validate_record(&ctx, record)?;
    }
    assertions.assert_timestamp_order(&ctx, &history)?;

    Ok(true)
}
