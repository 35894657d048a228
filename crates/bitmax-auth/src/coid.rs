//! Client order id generation
//!
//! BitMax correlates order placement and cancellation through a
//! client-generated 32-character id sent both as a request parameter and in
//! the `x-auth-coid` header. Ids are derived from the current time; the
//! exchange deduplicates on them, the client does not check for collisions.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Local;

/// A 32-character client order id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coid(String);

impl Coid {
    /// Wrap a caller-supplied id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id from the current time
    ///
    /// The seed is the locale-formatted local time concatenated with the
    /// millisecond epoch timestamp. The last 32 bytes of the seed are
    /// base64-encoded, `=` padding is stripped, and the last 32 characters
    /// of the encoding are kept.
    pub fn generate() -> Self {
        let now = Local::now();
        let seed = format!(
            "{}{}",
            now.format("%-m/%-d/%Y, %-I:%M:%S %p"),
            now.timestamp_millis()
        );
        Self::from_seed(&seed)
    }

    fn from_seed(seed: &str) -> Self {
        let bytes = seed.as_bytes();
        let tail = &bytes[bytes.len().saturating_sub(32)..];
        let encoded = BASE64.encode(tail).replace('=', "");
        let start = encoded.len().saturating_sub(32);
        Self(encoded[start..].to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Coid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Coid {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_coid_is_32_chars_without_padding() {
        let coid = Coid::generate();
        assert_eq!(coid.as_str().len(), 32);
        assert!(!coid.as_str().contains('='));
    }

    #[test]
    fn test_known_seed_derivation() {
        // base64 of the last 32 bytes of the seed, padding stripped,
        // last 32 characters kept
        let coid = Coid::from_seed("5/21/2019, 7:13:47 AM1558422827992");
        assert_eq!(coid.as_str(), "gNzoxMzo0NyBBTTE1NTg0MjI4Mjc5OTI");
    }

    #[test]
    fn test_different_timestamps_differ() {
        let a = Coid::from_seed("5/21/2019, 7:13:47 AM1558422827992");
        let b = Coid::from_seed("5/21/2019, 7:13:48 AM1558422828993");
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_seed_still_encodes() {
        let coid = Coid::from_seed("abc");
        assert!(!coid.as_str().is_empty());
        assert!(!coid.as_str().contains('='));
    }
}
