//! Error types for credential and identity operations

/// Errors that can occur while handling credentials or identities
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// No stored identity under the given alias
    #[error("unknown account alias: {0}")]
    UnknownAlias(String),

    /// Failed to read the credential file
    #[error("failed to read credential file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the credential file
    #[error("failed to parse credential file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Environment variable not set
    #[error("environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for credential and identity operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::UnknownAlias("trading-bot".to_string());
        assert!(err.to_string().contains("trading-bot"));

        let err = AuthError::EnvVarNotSet("BITMAX_API_KEY".to_string());
        assert!(err.to_string().contains("BITMAX_API_KEY"));
    }
}
