//! Per-request signing
//!
//! A signed BitMax request carries a millisecond timestamp and a base64
//! HMAC-SHA256 signature over `{timestamp}+{api_path}` (with `+{coid}`
//! appended for order operations). The api path in the prehash is a
//! canonical form of the endpoint, not the full path.

use chrono::Utc;

use crate::coid::Coid;
use crate::credentials::Credentials;

/// Canonical api path used in the signature prehash
///
/// Per-asset and per-order endpoints sign against their family name:
/// anything under `balance/` signs as `balance`, and `order/` endpoints
/// longer than 32 characters (i.e. carrying an embedded 32-character coid)
/// sign as `order`. Everything else signs verbatim, including `order/all`
/// and `order/batch`.
pub fn canonical_path(endpoint: &str) -> &str {
    if endpoint.contains("balance/") {
        "balance"
    } else if endpoint.contains("order/") && endpoint.len() > 32 {
        "order"
    } else {
        endpoint
    }
}

/// Request signer for building authenticated requests
///
/// Stamps the request time at construction so the timestamp used in the
/// prehash, the `x-auth-timestamp` header, and any injected `time` parameter
/// are identical.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: i64,
    path: &'a str,
    coid: Option<Coid>,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer for an endpoint without coid-based signing
    pub fn new(credentials: &'a Credentials, endpoint: &'a str) -> Self {
        Self {
            credentials,
            timestamp: Utc::now().timestamp_millis(),
            path: canonical_path(endpoint),
            coid: None,
        }
    }

    /// Create a signer that includes a client order id in the prehash
    pub fn with_coid(credentials: &'a Credentials, endpoint: &'a str, coid: Coid) -> Self {
        Self {
            coid: Some(coid),
            ..Self::new(credentials, endpoint)
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the millisecond timestamp stamped for this request
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Get the client order id, if this is a coid-signed request
    pub fn coid(&self) -> Option<&Coid> {
        self.coid.as_ref()
    }

    /// Build the prehash string
    pub fn prehash(&self) -> String {
        match &self.coid {
            Some(coid) => format!("{}+{}+{}", self.timestamp, self.path, coid),
            None => format!("{}+{}", self.timestamp, self.path),
        }
    }

    /// Sign the request, returning the base64 `x-auth-signature` value
    pub fn sign(&self) -> String {
        self.credentials.sign(&self.prehash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_path_balance_family() {
        assert_eq!(canonical_path("balance/BTC"), "balance");
        assert_eq!(canonical_path("balance"), "balance");
    }

    #[test]
    fn test_canonical_path_order_with_embedded_coid() {
        // "order/" plus a 32-character coid exceeds 32 characters
        assert_eq!(
            canonical_path("order/n3oafu6v9ozzl3nhzyel2jodgc83lu1j"),
            "order"
        );
        assert_eq!(
            canonical_path("order/fills/n3oafu6v9ozzl3nhzyel2jodgc83lu1j"),
            "order"
        );
    }

    #[test]
    fn test_canonical_path_short_order_endpoints_verbatim() {
        assert_eq!(canonical_path("order"), "order");
        assert_eq!(canonical_path("order/all"), "order/all");
        assert_eq!(canonical_path("order/batch"), "order/batch");
    }

    #[test]
    fn test_canonical_path_other_endpoints_verbatim() {
        assert_eq!(canonical_path("user/info"), "user/info");
        assert_eq!(canonical_path("transaction"), "transaction");
    }

    #[test]
    fn test_prehash_layout() {
        let creds = Credentials::new("key", "secret");

        let signer = RequestSigner::new(&creds, "user/info");
        assert_eq!(
            signer.prehash(),
            format!("{}+user/info", signer.timestamp())
        );

        let coid = Coid::new("n3oafu6v9ozzl3nhzyel2jodgc83lu1j");
        let signer = RequestSigner::with_coid(&creds, "order", coid);
        assert_eq!(
            signer.prehash(),
            format!(
                "{}+order+n3oafu6v9ozzl3nhzyel2jodgc83lu1j",
                signer.timestamp()
            )
        );
    }

    #[test]
    fn test_signature_matches_credentials_sign() {
        let creds = Credentials::new("key", "test_secret_key");
        let signer = RequestSigner::new(&creds, "order/all");
        assert_eq!(signer.sign(), creds.sign(&signer.prehash()));
    }
}
