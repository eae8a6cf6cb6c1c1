//! Staff identity verification against the external provider.

pub mod claims;
pub mod verifier;

pub use claims::ProviderClaims;
pub use verifier::{IdentityVerifier, ProviderTokenVerifier};
