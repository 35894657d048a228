//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::transport;

use super::require;

/// Default candle lookback when `from` is unset (17 days, in ms)
pub(crate) const DEFAULT_CANDLE_LOOKBACK_MS: i64 = 17 * 24 * 60 * 60 * 1000;

/// Default candle interval in minutes (6 hours)
pub(crate) const DEFAULT_CANDLE_INTERVAL: u32 = 360;

/// Default number of levels/trades returned by `depth` and `trades`
pub(crate) const DEFAULT_DEPTH: u32 = 10;

/// Default `from` for candle queries: now minus the lookback window
pub(crate) fn default_candle_from() -> i64 {
    Utc::now().timestamp_millis() - DEFAULT_CANDLE_LOOKBACK_MS
}

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    http: &'a Client,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(http: &'a Client) -> Self {
        Self { http }
    }

    /// List all assets
    #[instrument(skip(self))]
    pub async fn assets(&self) -> RestResult<Value> {
        transport::get_public(self.http, "assets", &[]).await
    }

    /// 24-hour ticker, for one symbol or all
    #[instrument(skip(self))]
    pub async fn prev_day(&self, symbol: Option<&str>) -> RestResult<Value> {
        let mut params = Vec::new();
        if let Some(symbol) = symbol {
            params.push(("symbol", symbol.to_string()));
        }
        transport::get_public(self.http, "ticker/24hr", &params).await
    }

    /// Fee schedule
    #[instrument(skip(self))]
    pub async fn fees(&self) -> RestResult<Value> {
        transport::get_public(self.http, "fees", &[]).await
    }

    /// Candlestick bar metadata (supported intervals)
    #[instrument(skip(self))]
    pub async fn barhist_info(&self) -> RestResult<Value> {
        transport::get_public(self.http, "barhist/info", &[]).await
    }

    /// Candlestick bar history
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol (required)
    /// * `from` - Start of the window in ms epoch (defaults to 17 days ago)
    /// * `to` - End of the window in ms epoch (optional)
    /// * `interval` - Bar interval in minutes (defaults to 360)
    #[instrument(skip(self))]
    pub async fn candles(
        &self,
        symbol: &str,
        from: Option<i64>,
        to: Option<i64>,
        interval: Option<u32>,
    ) -> RestResult<Value> {
        require(symbol, "symbol")?;

        let from = from.unwrap_or_else(default_candle_from);
        let interval = interval.unwrap_or(DEFAULT_CANDLE_INTERVAL);

        let mut params = vec![
            ("symbol", symbol.to_string()),
            ("from", from.to_string()),
            ("interval", interval.to_string()),
        ];
        if let Some(to) = to {
            params.push(("to", to.to_string()));
        }

        transport::get_public(self.http, "barhist", &params).await
    }

    /// Level 1 order book
    #[instrument(skip(self))]
    pub async fn quote(&self, symbol: &str) -> RestResult<Value> {
        require(symbol, "symbol")?;

        let params = [("symbol", symbol.to_string())];
        transport::get_public(self.http, "quote", &params).await
    }

    /// Level 2 order book
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol (required)
    /// * `n` - Number of levels per side (defaults to 10)
    #[instrument(skip(self))]
    pub async fn depth(&self, symbol: &str, n: Option<u32>) -> RestResult<Value> {
        require(symbol, "symbol")?;

        let params = [
            ("symbol", symbol.to_string()),
            ("n", n.unwrap_or(DEFAULT_DEPTH).to_string()),
        ];
        transport::get_public(self.http, "depth", &params).await
    }

    /// Recent trades
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol (required)
    /// * `n` - Number of trades (defaults to 10)
    #[instrument(skip(self))]
    pub async fn trades(&self, symbol: &str, n: Option<u32>) -> RestResult<Value> {
        require(symbol, "symbol")?;

        let params = [
            ("symbol", symbol.to_string()),
            ("n", n.unwrap_or(DEFAULT_DEPTH).to_string()),
        ];
        transport::get_public(self.http, "trades", &params).await
    }
}
