//! API credentials for BitMax authenticated requests
//!
//! BitMax keys the HMAC with the raw secret string, so the secret is stored
//! byte-for-byte as issued by the exchange.
//!
//! # Security
//!
//! Secrets are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;
use sha2::Sha256;
use std::path::Path;

use crate::error::AuthResult;

type HmacSha256 = Hmac<Sha256>;

/// API credentials for authenticated requests
///
/// The secret is zeroized when the `Credentials` are dropped, preventing
/// sensitive data from remaining in memory.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: SecretBox::new(Box::new(secret.into().into_bytes())),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITMAX_API_KEY` and `BITMAX_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("BITMAX_API_KEY")
            .map_err(|_| crate::AuthError::EnvVarNotSet("BITMAX_API_KEY".to_string()))?;
        let secret = std::env::var("BITMAX_SECRET")
            .map_err(|_| crate::AuthError::EnvVarNotSet("BITMAX_SECRET".to_string()))?;

        Ok(Self::new(api_key, secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a prehash string for BitMax's API
    ///
    /// Computes HMAC-SHA256 of the prehash keyed by the secret and returns
    /// the base64-encoded digest, as expected in the `x-auth-signature`
    /// header.
    pub fn sign(&self, prehash: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(prehash.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretBox with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretBox::new(Box::new(self.secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// On-disk credential file
///
/// JSON with an `apikey` and `secret`, and optionally an `alias` to store
/// the resulting identity under:
///
/// ```json
/// { "apikey": "...", "secret": "...", "alias": "main" }
/// ```
#[derive(Debug, Deserialize)]
pub struct CredentialFile {
    /// API key
    pub apikey: String,
    /// API secret
    pub secret: String,
    /// Optional alias for the identity store
    pub alias: Option<String>,
}

impl CredentialFile {
    /// Load and parse a credential file
    pub fn load(path: impl AsRef<Path>) -> AuthResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Split into credentials and the optional alias
    pub fn into_credentials(self) -> (Credentials, Option<String>) {
        (Credentials::new(self.apikey, self.secret), self.alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key", "test_secret_key");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_secret_key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_signing_reference_value() {
        // Independently computed: base64(HMAC-SHA256("1558422827992+order",
        // "test_secret_key"))
        let creds = Credentials::new("API_KEY", "test_secret_key");
        assert_eq!(
            creds.sign("1558422827992+order"),
            "mmF8fWQ+vuXQEg2CFgazCQNz/Iexbmz4bUnAc5QGGpE="
        );
    }

    #[test]
    fn test_signing_reference_value_with_coid() {
        let creds = Credentials::new("API_KEY", "test_secret_key");
        assert_eq!(
            creds.sign("1558422827992+order+n3oafu6v9ozzl3nhzyel2jodgc83lu1j"),
            "SMye2Gjg2FVSuGRFQkiXpjNq2ffDeTFD09VcjHaxD1g="
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = Credentials::new("API_KEY", "test_secret_key");
        assert_eq!(
            creds.sign("1558422827992+user/info"),
            creds.sign("1558422827992+user/info")
        );
    }

    #[test]
    fn test_credential_file_parsing() {
        let file: CredentialFile = serde_json::from_str(
            r#"{ "apikey": "key", "secret": "sec", "alias": "main" }"#,
        )
        .unwrap();
        let (creds, alias) = file.into_credentials();
        assert_eq!(creds.api_key(), "key");
        assert_eq!(alias.as_deref(), Some("main"));
    }

    #[test]
    fn test_credential_file_alias_optional() {
        let file: CredentialFile =
            serde_json::from_str(r#"{ "apikey": "key", "secret": "sec" }"#).unwrap();
        assert!(file.alias.is_none());
    }
}
