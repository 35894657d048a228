//! Identity management
//!
//! An authenticated BitMax session is an API key pair plus the
//! exchange-assigned account group used as a routing segment in
//! account-scoped URLs. Clients can register verified identities under an
//! alias and swap between them without re-running the auth handshake.

use std::collections::HashMap;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// A verified authentication context
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// API credentials
    pub credentials: Credentials,
    /// Exchange-assigned account group (URL routing segment)
    pub account_group: String,
}

impl AuthContext {
    /// Create a context from credentials and an account group
    pub fn new(credentials: Credentials, account_group: impl Into<String>) -> Self {
        Self {
            credentials,
            account_group: account_group.into(),
        }
    }
}

/// Store of verified identities keyed by alias
///
/// Owned by the client instance, so its lifecycle matches the client rather
/// than the process.
#[derive(Debug, Default)]
pub struct IdentityStore {
    contexts: HashMap<String, AuthContext>,
}

impl IdentityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a context under an alias, replacing any previous entry
    pub fn insert(&mut self, alias: impl Into<String>, context: AuthContext) {
        self.contexts.insert(alias.into(), context);
    }

    /// Look up a context by alias
    pub fn get(&self, alias: &str) -> Option<&AuthContext> {
        self.contexts.get(alias)
    }

    /// Resolve an alias to a fresh copy of its context
    pub fn resolve(&self, alias: &str) -> AuthResult<AuthContext> {
        self.contexts
            .get(alias)
            .cloned()
            .ok_or_else(|| AuthError::UnknownAlias(alias.to_string()))
    }

    /// Whether any identity is registered under the alias
    pub fn contains(&self, alias: &str) -> bool {
        self.contexts.contains_key(alias)
    }

    /// Number of registered identities
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(key: &str, group: &str) -> AuthContext {
        AuthContext::new(Credentials::new(key, "secret"), group)
    }

    #[test]
    fn test_resolve_unknown_alias() {
        let store = IdentityStore::new();
        let err = store.resolve("missing").unwrap_err();
        assert!(matches!(err, AuthError::UnknownAlias(alias) if alias == "missing"));
    }

    #[test]
    fn test_register_and_resolve_round_trip() {
        let mut store = IdentityStore::new();
        store.insert("main", context("key-a", "7"));

        let resolved = store.resolve("main").unwrap();
        assert_eq!(resolved.credentials.api_key(), "key-a");
        assert_eq!(resolved.account_group, "7");
        assert_eq!(
            resolved.credentials.sign("1+order"),
            context("key-a", "7").credentials.sign("1+order")
        );
    }

    #[test]
    fn test_insert_replaces_existing_alias() {
        let mut store = IdentityStore::new();
        store.insert("main", context("key-a", "7"));
        store.insert("main", context("key-b", "9"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.resolve("main").unwrap().credentials.api_key(), "key-b");
    }
}
