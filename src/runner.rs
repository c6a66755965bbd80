use futures_util::future::join_all;

use crate::assertions::HistoryAssertions;
use crate::checks::{FETCH_FUNDING_RATE_HISTORY, test_fetch_funding_rate_history};
use crate::errors::CheckError;
use crate::exchanges::Exchange;
use crate::models::SkipFile;

#[derive(Debug)]
pub struct CheckOutcome {
    pub exchange: &'static str,
    pub symbol: String,
    pub result: Result<bool, CheckError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.result, Ok(true))
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs the funding-rate-history check for every exchange × symbol pair.
pub struct Runner {
    exchanges: Vec<Box<dyn Exchange>>,
    symbols: Vec<String>,
    skip_file: SkipFile,
    assertions: Box<dyn HistoryAssertions>,
}

impl Runner {
    pub fn new(
        exchanges: Vec<Box<dyn Exchange>>,
        symbols: Vec<String>,
        skip_file: SkipFile,
        assertions: impl HistoryAssertions + 'static,
    ) -> Self {
        Self {
            exchanges,
            symbols,
            skip_file,
            assertions: Box::new(assertions),
        }
    }

    /// Exchanges run concurrently; symbols of one exchange run one after another.
    /// A failing check never stops the others.
    pub async fn run(&self) -> Report {
        let per_exchange = self
            .exchanges
            .iter()
            .map(|exchange| self.run_exchange(exchange.as_ref()));

        let outcomes = join_all(per_exchange).await.into_iter().flatten().collect();
        Report { outcomes }
    }

    async fn run_exchange(&self, exchange: &dyn Exchange) -> Vec<CheckOutcome> {
        let name = exchange.name();
        let skipped = self.skip_file.for_method(name, FETCH_FUNDING_RATE_HISTORY);
        let mut outcomes = Vec::with_capacity(self.symbols.len());

        for symbol in &self.symbols {
            let result =
                test_fetch_funding_rate_history(exchange, self.assertions.as_ref(), &skipped, symbol)
                    .await;

            match &result {
                Ok(_) => tracing::info!("[{name}] {FETCH_FUNDING_RATE_HISTORY} {symbol} passed"),
                Err(e) => tracing::error!("[{name}] {FETCH_FUNDING_RATE_HISTORY} {symbol} failed: {e}"),
            }

            outcomes.push(CheckOutcome {
                exchange: name,
                symbol: symbol.clone(),
                result,
            });
        }

        outcomes
    }
}
