//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};

/// Validate a required string parameter before any network call
pub(crate) fn require(value: &str, name: &str) -> RestResult<()> {
    if value.is_empty() {
        Err(RestError::missing(name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty() {
        let err = require("", "symbol").unwrap_err();
        assert!(matches!(err, RestError::InvalidArgument(name) if name == "symbol"));
        assert!(require("BTC/USDT", "symbol").is_ok());
    }
}
