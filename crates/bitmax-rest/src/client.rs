//! Main REST client implementation

use std::path::Path;
use std::time::Duration;

use bitmax_auth::{AuthContext, Coid, CredentialFile, Credentials, IdentityStore};
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{OrderRequest, OrderSide, OrderType, TimeInForce, TransactionType};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `user/info` responses carrying one of these messages mean the key pair
/// was rejected during the auth handshake
const FAILURE_AUTH: &[&str] = &["ApiKeyFailure"];

/// BitMax REST API client
///
/// Provides access to public market data and, once authenticated, to the
/// account-scoped private endpoints. The authentication context and the
/// alias store are owned by the client instance: `auth`/`set_account` take
/// `&mut self`, so an identity swap cannot race an in-flight signed request.
///
/// # Example
///
/// ```no_run
/// use bitmax_rest::BitmaxClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let mut client = BitmaxClient::new();
///     let quote = client.quote("BTC/USDT").await?;
///     println!("{}", quote);
///
///     // Authenticate for private endpoints
///     client.auth("api-key", "api-secret", Some("main")).await?;
///     let balances = client.balances().await?;
///     println!("{}", balances);
///
///     Ok(())
/// }
/// ```
pub struct BitmaxClient {
    http: Client,
    active: Option<AuthContext>,
    identities: IdentityStore,
}

impl BitmaxClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available until `auth` is called.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("bitmax-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created BitMax REST client");

        Self {
            http,
            active: None,
            identities: IdentityStore::new(),
        }
    }

    /// Check if the client has an active authentication context
    pub fn has_credentials(&self) -> bool {
        self.active.is_some()
    }

    /// The account group of the active context, if authenticated
    pub fn account_group(&self) -> Option<&str> {
        self.active.as_ref().map(|ctx| ctx.account_group.as_str())
    }

    // ========================================================================
    // Authentication / identity management
    // ========================================================================

    /// Authenticate with an API key pair
    ///
    /// Verifies the credentials against `user/info` before committing them:
    /// on a failed handshake the previously active context is untouched.
    /// When an alias is given, the verified context is also registered in
    /// the identity store for later `set_account` calls.
    pub async fn auth(
        &mut self,
        api_key: impl Into<String>,
        secret: impl Into<String>,
        alias: Option<&str>,
    ) -> RestResult<()> {
        let credentials = Credentials::new(api_key, secret);
        self.verify_and_commit(credentials, alias.map(str::to_string))
            .await
    }

    /// Authenticate from a credential file
    ///
    /// The file is JSON with `apikey`, `secret`, and an optional `alias`.
    pub async fn auth_from_file(&mut self, path: impl AsRef<Path>) -> RestResult<()> {
        let (credentials, alias) = CredentialFile::load(path)?.into_credentials();
        self.verify_and_commit(credentials, alias).await
    }

    /// Switch the active context to a previously registered alias
    pub fn set_account(&mut self, alias: &str) -> RestResult<()> {
        let context = self.identities.resolve(alias)?;
        self.active = Some(context);
        Ok(())
    }

    async fn verify_and_commit(
        &mut self,
        credentials: Credentials,
        alias: Option<String>,
    ) -> RestResult<()> {
        // user/info is global-scoped, so an empty account group is fine for
        // the handshake itself.
        let candidate = AuthContext::new(credentials, "");
        let info = AccountEndpoints::new(&self.http, &candidate)
            .user_info()
            .await?;

        let rejected = info
            .get("message")
            .and_then(Value::as_str)
            .map_or(false, |message| FAILURE_AUTH.contains(&message));
        if rejected {
            return Err(RestError::Authentication(info));
        }

        let account_group = match info.get("accountGroup") {
            Some(Value::String(group)) => group.clone(),
            Some(Value::Number(group)) => group.to_string(),
            _ => return Err(RestError::Authentication(info)),
        };

        let context = AuthContext::new(candidate.credentials, account_group);
        if let Some(alias) = alias {
            self.identities.insert(alias, context.clone());
        }
        self.active = Some(context);
        Ok(())
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Public market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http)
    }

    /// Private account endpoints (requires authentication)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let context = self.active.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(&self.http, context))
    }

    /// Trading endpoints (requires authentication)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let context = self.active.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(&self.http, context))
    }

    // ========================================================================
    // Public market data
    // ========================================================================

    /// List all assets
    pub async fn assets(&self) -> RestResult<Value> {
        self.market().assets().await
    }

    /// 24-hour ticker, for one symbol or all
    pub async fn prev_day(&self, symbol: Option<&str>) -> RestResult<Value> {
        self.market().prev_day(symbol).await
    }

    /// Fee schedule
    pub async fn fees(&self) -> RestResult<Value> {
        self.market().fees().await
    }

    /// Candlestick bar metadata
    pub async fn barhist_info(&self) -> RestResult<Value> {
        self.market().barhist_info().await
    }

    /// Candlestick bar history
    pub async fn candles(
        &self,
        symbol: &str,
        from: Option<i64>,
        to: Option<i64>,
        interval: Option<u32>,
    ) -> RestResult<Value> {
        self.market().candles(symbol, from, to, interval).await
    }

    /// Level 1 order book
    pub async fn quote(&self, symbol: &str) -> RestResult<Value> {
        self.market().quote(symbol).await
    }

    /// Level 2 order book
    pub async fn depth(&self, symbol: &str, n: Option<u32>) -> RestResult<Value> {
        self.market().depth(symbol, n).await
    }

    /// Recent trades
    pub async fn trades(&self, symbol: &str, n: Option<u32>) -> RestResult<Value> {
        self.market().trades(symbol, n).await
    }

    // ========================================================================
    // Private account operations
    // ========================================================================

    /// Account metadata, including the account group
    pub async fn user_info(&self) -> RestResult<Value> {
        self.account()?.user_info().await
    }

    /// Balances of all assets
    pub async fn balances(&self) -> RestResult<Value> {
        self.account()?.balances().await
    }

    /// Balance of one asset
    pub async fn balance(&self, asset: &str) -> RestResult<Value> {
        self.account()?.balance(asset).await
    }

    /// Deposit/withdraw history for an asset
    pub async fn transactions(
        &self,
        asset_code: &str,
        tx_type: Option<TransactionType>,
    ) -> RestResult<Value> {
        self.account()?.transactions(asset_code, tx_type).await
    }

    // ========================================================================
    // Order lifecycle
    // ========================================================================

    /// Place an order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading()?.place_order(order).await
    }

    /// Place a limit or market order from its parts
    #[allow(clippy::too_many_arguments)]
    pub async fn order(
        &self,
        order_type: OrderType,
        side: OrderSide,
        symbol: &str,
        price: Decimal,
        qty: Decimal,
        time_in_force: Option<TimeInForce>,
    ) -> RestResult<Value> {
        let mut order = OrderRequest::limit(symbol, side, price, qty);
        order.order_type = order_type;
        order.time_in_force = time_in_force;
        self.place_order(&order).await
    }

    /// Basic order data for one order
    pub async fn order_status(&self, coid: &Coid) -> RestResult<Value> {
        self.trading()?.order_status(coid).await
    }

    /// Fills of one order
    pub async fn order_fills(&self, coid: &Coid) -> RestResult<Value> {
        self.trading()?.order_fills(coid).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, symbol: &str, orig_coid: &Coid) -> RestResult<Value> {
        self.trading()?.cancel_order(symbol, orig_coid).await
    }

    /// Cancel all open orders, optionally for one symbol
    pub async fn cancel_all(&self, symbol: Option<&str>) -> RestResult<Value> {
        self.trading()?.cancel_all(symbol).await
    }

    /// Cancel multiple orders by coid in one request
    pub async fn batch_cancel(&self, orig_coids: &[&str]) -> RestResult<Value> {
        self.trading()?.batch_cancel(orig_coids).await
    }
}

impl Default for BitmaxClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitmaxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmaxClient")
            .field("has_credentials", &self.has_credentials())
            .field("identities", &self.identities.len())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmax_auth::AuthError;

    #[test]
    fn test_client_without_credentials() {
        let client = BitmaxClient::new();
        assert!(!client.has_credentials());
        assert!(client.account_group().is_none());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_auth_required_error() {
        let client = BitmaxClient::new();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_set_account_unknown_alias() {
        let mut client = BitmaxClient::new();
        let err = client.set_account("missing").unwrap_err();
        assert!(err.is_authentication());
        assert!(matches!(
            err,
            RestError::Auth(AuthError::UnknownAlias(alias)) if alias == "missing"
        ));
    }

    #[tokio::test]
    async fn test_private_calls_fail_before_network_without_auth() {
        let client = BitmaxClient::new();
        assert!(matches!(
            client.balances().await,
            Err(RestError::AuthRequired)
        ));
        assert!(matches!(
            client.cancel_all(None).await,
            Err(RestError::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn test_public_required_params_fail_before_network() {
        let client = BitmaxClient::new();
        assert!(matches!(
            client.quote("").await,
            Err(RestError::InvalidArgument(_))
        ));
    }
}
