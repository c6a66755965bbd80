pub mod fetch_funding_rate_history;

pub use fetch_funding_rate_history::{
    METHOD as FETCH_FUNDING_RATE_HISTORY, test_fetch_funding_rate_history,
};
