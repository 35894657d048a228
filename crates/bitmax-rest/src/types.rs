//! Types for BitMax REST API requests
//!
//! Response bodies are returned as raw `serde_json::Value` — the exchange's
//! schemas are not modeled client-side. Request parameters are typed.

use bitmax_auth::Coid;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Market => write!(f, "market"),
        }
    }
}

/// Time in force for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good till cancelled (exchange default)
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
        }
    }
}

/// Transaction (deposit/withdraw history) type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Deposits
    Deposit,
    /// Withdrawals
    Withdrawal,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Request to place an order
///
/// Price and quantity are `Decimal`s and go over the wire as decimal
/// strings; the exchange rejects binary floating point.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading symbol (e.g. "BTC/USDT")
    pub symbol: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order price
    pub price: Decimal,
    /// Order quantity
    pub qty: Decimal,
    /// Time in force (GTC when unset)
    pub time_in_force: Option<TimeInForce>,
    /// Client order id (generated at dispatch when unset)
    pub coid: Option<Coid>,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(symbol: impl Into<String>, side: OrderSide, price: Decimal, qty: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            price,
            qty,
            time_in_force: None,
            coid: None,
        }
    }

    /// Create a market order
    ///
    /// BitMax still expects an `orderPrice`; for market orders it is only
    /// used for notional checks.
    pub fn market(
        symbol: impl Into<String>,
        side: OrderSide,
        price: Decimal,
        qty: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::Market,
            ..Self::limit(symbol, side, price, qty)
        }
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Supply a client order id instead of generating one at dispatch
    pub fn with_coid(mut self, coid: Coid) -> Self {
        self.coid = Some(coid);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_request_builder() {
        let order = OrderRequest::limit("BTC/USDT", OrderSide::Buy, dec!(9500.5), dec!(0.01))
            .with_time_in_force(TimeInForce::ImmediateOrCancel)
            .with_coid(Coid::new("n3oafu6v9ozzl3nhzyel2jodgc83lu1j"));

        assert_eq!(order.symbol, "BTC/USDT");
        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.time_in_force, Some(TimeInForce::ImmediateOrCancel));
        assert!(order.coid.is_some());
    }

    #[test]
    fn test_decimal_string_coercion() {
        // Decimal strings go on the wire verbatim, no float rounding
        let order = OrderRequest::limit("BTC/USDT", OrderSide::Sell, dec!(9500.50), dec!(0.010));
        assert_eq!(order.price.to_string(), "9500.50");
        assert_eq!(order.qty.to_string(), "0.010");
    }

    #[test]
    fn test_wire_spellings() {
        assert_eq!(OrderSide::Sell.to_string(), "sell");
        assert_eq!(OrderType::Market.to_string(), "market");
        assert_eq!(TimeInForce::GoodTillCancelled.to_string(), "GTC");
        assert_eq!(TransactionType::Withdrawal.to_string(), "withdrawal");
    }
}
