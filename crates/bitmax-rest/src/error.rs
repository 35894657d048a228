//! Error types for REST API operations

use bitmax_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required parameter was missing or empty (raised before any
    /// network call)
    #[error("missing required parameter: {0}")]
    InvalidArgument(String),

    /// The exchange responded with an error payload
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw error payload from the exchange
        body: serde_json::Value,
    },

    /// Identity verification failed during the auth handshake
    #[error("authentication failed: {0}")]
    Authentication(serde_json::Value),

    /// A private endpoint was called without an active authentication
    /// context
    #[error("authentication required for this endpoint")]
    AuthRequired,

    /// Credential or identity handling failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Convenience constructor for a missing required parameter
    pub(crate) fn missing(param: &str) -> Self {
        Self::InvalidArgument(param.to_string())
    }

    /// Check whether this error belongs to the authentication family
    /// (failed handshake, missing context, or an unknown alias)
    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_) | Self::AuthRequired | Self::Auth(AuthError::UnknownAlias(_))
        )
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = RestError::missing("symbol");
        assert!(err.to_string().contains("symbol"));
        assert!(!err.is_authentication());
    }

    #[test]
    fn test_authentication_family() {
        let payload = serde_json::json!({ "message": "ApiKeyFailure" });
        assert!(RestError::Authentication(payload).is_authentication());
        assert!(RestError::AuthRequired.is_authentication());
        assert!(
            RestError::Auth(AuthError::UnknownAlias("missing".to_string())).is_authentication()
        );
    }

    #[test]
    fn test_api_error_carries_payload() {
        let err = RestError::Api {
            status: 400,
            body: serde_json::json!({ "code": 6010, "message": "Not Enough Account Balance" }),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Not Enough Account Balance"));
    }
}
