mod common;

use async_trait::async_trait;
use httpmock::prelude::*;
use rstest::rstest;

use common::{EIGHT_HOURS_MS, SYMBOL, T0, mock_binance_history, mock_bybit_history};
use funding_check::exchanges::{Binance, Bybit, Exchange};
use funding_check::{
    CheckError, ExchangeError, FundingRateHistory, SharedAssertions, SkippedProperties,
    test_fetch_funding_rate_history,
};

/// Serves a fixed response, for shapes the real connectors never produce.
struct CannedExchange(Vec<FundingRateHistory>);

#[async_trait]
impl Exchange for CannedExchange {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn fetch_funding_rate_history(
        &self,
        _symbol: &str,
    ) -> Result<Vec<FundingRateHistory>, ExchangeError> {
        Ok(self.0.clone())
    }
}

async fn check(
    exchange: &dyn Exchange,
    skipped: &SkippedProperties,
    symbol: &str,
) -> Result<bool, CheckError> {
    let assertions = SharedAssertions::new().strict_timestamps(true);
    test_fetch_funding_rate_history(exchange, &assertions, skipped, symbol).await
}

#[tokio::test]
async fn live_shaped_binance_history_passes() {
    let server = MockServer::start_async().await;
    mock_binance_history(&server, &[T0, T0 + EIGHT_HOURS_MS, T0 + 2 * EIGHT_HOURS_MS]).await;

    let binance = Binance::new().with_base_url(server.base_url());
    let passed = check(&binance, &SkippedProperties::new(), SYMBOL).await.unwrap();

    assert!(passed);
}

#[tokio::test]
async fn live_shaped_bybit_history_passes() {
    let server = MockServer::start_async().await;
    mock_bybit_history(&server, &[T0 + EIGHT_HOURS_MS, T0]).await;

    let bybit = Bybit::new().with_base_url(server.base_url());
    assert!(check(&bybit, &SkippedProperties::new(), SYMBOL).await.unwrap());
}

#[tokio::test]
async fn minimal_spot_records_pass_with_default_assertions() {
    let exchange = CannedExchange(vec![
        FundingRateHistory::new("BTC/USDT", 1000, 0.0001),
        FundingRateHistory::new("BTC/USDT", 2000, 0.0002),
    ]);

    let result = test_fetch_funding_rate_history(
        &exchange,
        &SharedAssertions::new(),
        &SkippedProperties::new(),
        "BTC/USDT",
    )
    .await;

    assert!(result.unwrap());
}

#[rstest]
#[case::empty(vec![], "non-empty array")]
#[case::out_of_order(
    vec![
        FundingRateHistory::new(SYMBOL, T0 + EIGHT_HOURS_MS, 0.0001),
        FundingRateHistory::new(SYMBOL, T0, 0.0001),
    ],
    "ascending sorted array"
)]
#[case::missing_rate(
    vec![FundingRateHistory { funding_rate: None, ..FundingRateHistory::new(SYMBOL, T0, 0.0) }],
    "\"fundingRate\" key is missing"
)]
#[case::missing_timestamp(
    vec![FundingRateHistory { timestamp: None, ..FundingRateHistory::new(SYMBOL, T0, 0.0001) }],
    "\"timestamp\" key is missing"
)]
#[case::missing_symbol(
    vec![FundingRateHistory { symbol: None, ..FundingRateHistory::new(SYMBOL, T0, 0.0) }],
    "\"symbol\" key is missing"
)]
#[case::implausible_timestamp(
    vec![FundingRateHistory::new(SYMBOL, 1000, 0.0001)],
    "plausible range"
)]
#[case::wrong_symbol(
    vec![FundingRateHistory::new("ETH/USDT:USDT", T0, 0.0001)],
    "ETH/USDT:USDT"
)]
#[tokio::test]
async fn broken_history_fails_with_context(
    #[case] records: Vec<FundingRateHistory>,
    #[case] expected: &str,
) {
    let exchange = CannedExchange(records);
    let err = check(&exchange, &SkippedProperties::new(), SYMBOL)
        .await
        .unwrap_err();

    let assertion = err.as_assertion().expect("assertion failure");
    assert!(assertion.message.contains(expected), "{assertion}");
    assert_eq!(assertion.exchange, "canned");
    assert_eq!(assertion.method, "fetchFundingRateHistory");
    assert_eq!(assertion.symbol, SYMBOL);
}

#[rstest]
#[case::empty_allowed(vec![], "emptyResponse")]
#[case::missing_rate_allowed(
    vec![FundingRateHistory { funding_rate: None, ..FundingRateHistory::new(SYMBOL, T0, 0.0) }],
    "fundingRate"
)]
#[case::foreign_symbol_allowed(
    vec![FundingRateHistory::new("BTCUSDT", T0, 0.0001)],
    "symbol"
)]
#[tokio::test]
async fn skipped_properties_suppress_checks(
    #[case] records: Vec<FundingRateHistory>,
    #[case] property: &str,
) {
    let exchange = CannedExchange(records);
    let skipped = SkippedProperties::new().with(property);

    assert!(check(&exchange, &skipped, SYMBOL).await.unwrap());
}
