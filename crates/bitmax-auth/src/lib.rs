//! Credentials, request signing, and identity management for the BitMax API
//!
//! BitMax signs private requests with HMAC-SHA256 over a canonical prehash
//! string of the form `{timestamp}+{api_path}` (plus `+{coid}` when the
//! operation carries a client order id). This crate owns that scheme:
//! credential storage, the per-request signer, client order id generation,
//! and the alias store used to switch between accounts.
//!
//! # Example
//!
//! ```no_run
//! use bitmax_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let signer = RequestSigner::new(&creds, "order/all");
//!     let signature = signer.sign();
//!     println!("x-auth-signature: {}", signature);
//!     Ok(())
//! }
//! ```

mod coid;
mod credentials;
mod error;
mod identity;
mod signer;

pub use coid::Coid;
pub use credentials::{Credentials, CredentialFile};
pub use error::{AuthError, AuthResult};
pub use identity::{AuthContext, IdentityStore};
pub use signer::{canonical_path, RequestSigner};
