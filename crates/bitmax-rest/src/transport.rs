//! Shared request plumbing
//!
//! Public endpoints are plain GETs against the global base URL. Signed
//! endpoints attach the auth headers and, for endpoints carrying the
//! account-scope marker, route through the account-group URL segment.
//! Responses come back as raw JSON; non-success responses are logged and
//! surfaced as [`RestError::Api`] without retries.

use bitmax_auth::{AuthContext, Coid, RequestSigner};
use reqwest::{Client, Method, Response};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};

/// Global base URL for public and non-scoped signed endpoints
pub(crate) const BASE_URL: &str = "https://bitmax.io/api/v1/";

/// Exchange host, used to build account-scoped URLs
const HOST: &str = "https://bitmax.io";

/// Endpoints prefixed with this marker route through the account group
pub(crate) const ACCOUNT_SCOPE_MARKER: char = '@';

/// Split an endpoint into its base URL and the marker-stripped path
pub(crate) fn route<'e>(endpoint: &'e str, account_group: &str) -> (String, &'e str) {
    match endpoint.strip_prefix(ACCOUNT_SCOPE_MARKER) {
        Some(stripped) => (format!("{}/{}/api/v1/", HOST, account_group), stripped),
        None => (BASE_URL.to_string(), endpoint),
    }
}

/// Issue a GET against a public endpoint
pub(crate) async fn get_public(
    http: &Client,
    endpoint: &str,
    params: &[(&str, String)],
) -> RestResult<Value> {
    debug!(endpoint, "dispatching public request");

    let response = http
        .get(format!("{}{}", BASE_URL, endpoint))
        .query(params)
        .send()
        .await?;

    read_json(response).await
}

/// Issue a signed request
///
/// When a coid is given, it and the request timestamp are injected into the
/// parameters and the coid participates in the signature prehash. GET
/// requests send parameters as the query string, POST/DELETE as a JSON body.
pub(crate) async fn send_signed(
    http: &Client,
    context: &AuthContext,
    method: Method,
    endpoint: &str,
    mut params: Map<String, Value>,
    coid: Option<Coid>,
) -> RestResult<Value> {
    let (base, path) = route(endpoint, &context.account_group);

    let signer = match coid {
        Some(coid) => RequestSigner::with_coid(&context.credentials, path, coid),
        None => RequestSigner::new(&context.credentials, path),
    };

    let mut request = http
        .request(method.clone(), format!("{}{}", base, path))
        .header("x-auth-key", signer.api_key())
        .header("x-auth-timestamp", signer.timestamp().to_string())
        .header("x-auth-signature", signer.sign());

    if let Some(coid) = signer.coid() {
        request = request.header("x-auth-coid", coid.as_str());
        params.insert("coid".to_string(), Value::from(coid.as_str()));
        params.insert("time".to_string(), Value::from(signer.timestamp()));
    }

    debug!(%method, endpoint = path, "dispatching signed request");

    let request = if method == Method::GET {
        request.query(&query_pairs(&params))
    } else {
        request.json(&Value::Object(params))
    };

    read_json(request.send().await?).await
}

/// Read a response body as JSON, surfacing non-success payloads as errors
async fn read_json(response: Response) -> RestResult<Value> {
    let status = response.status();
    let text = response.text().await?;
    let body = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    };

    if !status.is_success() {
        warn!(status = status.as_u16(), %body, "exchange rejected the request");
        return Err(RestError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Flatten JSON parameters into query pairs
fn query_pairs(params: &Map<String, Value>) -> Vec<(&str, String)> {
    params
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.as_str(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_global_endpoint() {
        let (base, path) = route("user/info", "6");
        assert_eq!(base, "https://bitmax.io/api/v1/");
        assert_eq!(path, "user/info");
    }

    #[test]
    fn test_route_account_scoped_endpoint() {
        let (base, path) = route("@order/all", "6");
        assert_eq!(base, "https://bitmax.io/6/api/v1/");
        assert_eq!(path, "order/all");
    }

    #[test]
    fn test_query_pairs_stringify_scalars() {
        let mut params = Map::new();
        params.insert("symbol".to_string(), Value::from("BTC/USDT"));
        params.insert("n".to_string(), Value::from(10));

        let mut pairs = query_pairs(&params);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![("n", "10".to_string()), ("symbol", "BTC/USDT".to_string())]
        );
    }
}
