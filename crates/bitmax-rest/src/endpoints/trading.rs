//! Trading endpoints for the order lifecycle
//!
//! These endpoints require an authenticated context and are account-scoped.
//! Placement and cancellation sign with a client order id (coid); status
//! and bulk-cancel reads do not.

use bitmax_auth::{AuthContext, Coid};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::error::{RestError, RestResult};
use crate::transport;
use crate::types::{OrderRequest, TimeInForce};

use super::require;

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    http: &'a Client,
    context: &'a AuthContext,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, context: &'a AuthContext) -> Self {
        Self { http, context }
    }

    /// Place an order
    ///
    /// Price and quantity go over the wire as decimal strings and
    /// `timeInForce` defaults to GTC. The order's coid is generated when
    /// the request does not carry one.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side, order_type = %order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        require(&order.symbol, "symbol")?;

        let coid = order.coid.clone().unwrap_or_else(Coid::generate);

        debug!(
            "placing {} {} order for {} {} @ {}",
            order.side, order.order_type, order.qty, order.symbol, order.price
        );

        transport::send_signed(
            self.http,
            self.context,
            Method::POST,
            "@order",
            order_params(order),
            Some(coid),
        )
        .await
    }

    /// Basic order data for one order
    #[instrument(skip(self))]
    pub async fn order_status(&self, coid: &Coid) -> RestResult<Value> {
        let endpoint = format!("@order/{}", coid);
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

    /// Fills of one order
    #[instrument(skip(self))]
    pub async fn order_fills(&self, coid: &Coid) -> RestResult<Value> {
        let endpoint = format!("@order/fills/{}", coid);
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

    /// Cancel an order
    ///
    /// # Arguments
    /// * `symbol` - Symbol the order was placed on (required)
    /// * `orig_coid` - Coid of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, symbol: &str, orig_coid: &Coid) -> RestResult<Value> {
        require(symbol, "symbol")?;

        let mut params = Map::new();
        params.insert("symbol".to_string(), Value::from(symbol));
        params.insert("origCoid".to_string(), Value::from(orig_coid.as_str()));

        debug!("cancelling order {}", orig_coid);

        transport::send_signed(
            self.http,
            self.context,
            Method::DELETE,
            "@order",
            params,
            Some(Coid::generate()),
        )
        .await
    }

    /// Cancel all open orders, optionally for one symbol
    #[instrument(skip(self))]
    pub async fn cancel_all(&self, symbol: Option<&str>) -> RestResult<Value> {
        let mut params = Map::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), Value::from(symbol));
        }

        transport::send_signed(
            self.http,
            self.context,
            Method::DELETE,
            "@order/all",
            params,
            None,
        )
        .await
    }

    /// Cancel multiple orders by coid in one request
    ///
    /// The ids are joined with `+` into a single `origCoid` parameter.
    #[instrument(skip(self), fields(count = orig_coids.len()))]
    pub async fn batch_cancel(&self, orig_coids: &[&str]) -> RestResult<Value> {
        if orig_coids.is_empty() {
            return Err(RestError::missing("origCoid"));
        }

        let mut params = Map::new();
        params.insert("origCoid".to_string(), Value::from(join_coids(orig_coids)));

        debug!("cancelling {} orders", orig_coids.len());

        transport::send_signed(
            self.http,
            self.context,
            Method::DELETE,
            "@order/batch",
            params,
            Some(Coid::generate()),
        )
        .await
    }
}

/// Shape an order request into wire parameters
fn order_params(order: &OrderRequest) -> Map<String, Value> {
    let tif = order.time_in_force.unwrap_or(TimeInForce::GoodTillCancelled);

    let mut params = Map::new();
    params.insert("orderType".to_string(), Value::from(order.order_type.to_string()));
    params.insert("side".to_string(), Value::from(order.side.to_string()));
    params.insert("symbol".to_string(), Value::from(order.symbol.clone()));
    params.insert("orderPrice".to_string(), Value::from(order.price.to_string()));
    params.insert("orderQty".to_string(), Value::from(order.qty.to_string()));
    params.insert("timeInForce".to_string(), Value::from(tif.to_string()));
    params
}

/// Join coids into the exchange's batch-cancel delimiter format
fn join_coids(coids: &[&str]) -> String {
    coids.join("+")
}
