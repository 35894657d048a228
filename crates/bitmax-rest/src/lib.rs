//! REST API client for the BitMax cryptocurrency exchange
//!
//! This crate provides a thin client over BitMax's REST API v1: public
//! market data (assets, tickers, order book, trades, candles) and private
//! account operations (balances, order lifecycle, transaction history).
//!
//! # Authentication
//!
//! Private endpoints are signed with HMAC-SHA256 over a canonical
//! `{timestamp}+{api_path}[+{coid}]` prehash (see the `bitmax-auth` crate).
//! The client verifies credentials against `user/info` before committing
//! them and can hold several verified identities under aliases, switched
//! with [`BitmaxClient::set_account`].
//!
//! # Responses
//!
//! Response bodies are returned as raw `serde_json::Value` — the exchange's
//! schemas are not modeled or validated client-side.
//!
//! # Example
//!
//! ```no_run
//! use bitmax_rest::{BitmaxClient, OrderRequest, OrderSide};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = BitmaxClient::new();
//!
//!     // Public market data
//!     let candles = client.candles("BTC/USDT", None, None, None).await?;
//!     println!("{}", candles);
//!
//!     // Private endpoints
//!     client.auth_from_file("bitmax.json").await?;
//!     let order = OrderRequest::limit(
//!         "BTC/USDT",
//!         OrderSide::Buy,
//!         Decimal::new(95005, 1),
//!         Decimal::new(1, 2),
//!     );
//!     let placed = client.place_order(&order).await?;
//!     println!("{}", placed);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

mod transport;

// Re-export main types
pub use client::{BitmaxClient, ClientConfig};
pub use error::{RestError, RestResult};
pub use types::{OrderRequest, OrderSide, OrderType, TimeInForce, TransactionType};

// Re-export the auth surface callers interact with
pub use bitmax_auth::{AuthError, Coid, CredentialFile, Credentials};
