//! Claims carried by the provider's staff session tokens.

use serde::{Deserialize, Serialize};

/// Claims payload of a provider-issued staff session token.
///
/// Only the subject id is consumed downstream; everything the provider
/// asserts beyond identity is ignored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClaims {
    /// Subject — the staff user's provider-assigned id.
    pub sub: String,
    /// Issuer of the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
