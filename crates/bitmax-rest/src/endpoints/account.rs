//! Private account endpoints
//!
//! These endpoints require an authenticated context. All reads except
//! `user/info` are account-scoped and route through the account group.

use bitmax_auth::AuthContext;
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::RestResult;
use crate::transport;
use crate::types::TransactionType;

use super::require;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    http: &'a Client,
    context: &'a AuthContext,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, context: &'a AuthContext) -> Self {
        Self { http, context }
    }

    /// Account metadata, including the account group
    ///
    /// This is the call the auth handshake verifies credentials against.
    #[instrument(skip(self))]
    pub async fn user_info(&self) -> RestResult<Value> {
        transport::send_signed(
            self.http,
            self.context,
            Method::GET,
            "user/info",
            Map::new(),
            None,
        )
        .await
    }

    /// Balances of all assets
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<Value> {
        transport::send_signed(
            self.http,
            self.context,
            Method::GET,
            "@balance",
            Map::new(),
            None,
        )
        .await
    }

    /// Balance of one asset
    #[instrument(skip(self))]
    pub async fn balance(&self, asset: &str) -> RestResult<Value> {
        require(asset, "asset")?;

        let endpoint = format!("@balance/{}", asset);
        transport::send_signed(
            self.http,
            self.context,
            Method::GET,
            &endpoint,
            Map::new(),
            None,
        )
        .await
    }

    /// Deposit/withdraw history for an asset
    ///
    /// # Arguments
    /// * `asset_code` - Asset to list transactions for (required)
    /// * `tx_type` - Deposits or withdrawals (defaults to deposits)
    #[instrument(skip(self))]
    pub async fn transactions(
        &self,
        asset_code: &str,
        tx_type: Option<TransactionType>,
    ) -> RestResult<Value> {
        require(asset_code, "assetCode")?;

        let tx_type = tx_type.unwrap_or(TransactionType::Deposit);
        let mut params = Map::new();
        params.insert("assetCode".to_string(), Value::from(asset_code));
        params.insert("txType".to_string(), Value::from(tx_type.to_string()));

        transport::send_signed(
            self.http,
            self.context,
            Method::GET,
            "@transaction",
            params,
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RestError;
    use bitmax_auth::Credentials;

    #[tokio::test]
    async fn test_balance_requires_asset() {
        let http = Client::new();
        let context = AuthContext::new(Credentials::new("key", "secret"), "6");
        let account = AccountEndpoints::new(&http, &context);

        let result = account.balance("").await;
        assert!(matches!(result, Err(RestError::InvalidArgument(_))));

        let result = account.transactions("", None).await;
        assert!(matches!(result, Err(RestError::InvalidArgument(_))));
    }
}
