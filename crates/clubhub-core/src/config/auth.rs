//! Staff identity provider and password policy configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
///
/// Staff identity is delegated to an external provider which issues a
/// signed session token in a cookie; this section carries what is needed
/// to verify that token locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the provider-managed staff session cookie.
    #[serde(default = "default_provider_cookie")]
    pub provider_cookie_name: String,
    /// Shared secret used to verify the provider's session tokens.
    pub provider_secret: String,
    /// Expected token issuer; when set, tokens from other issuers are rejected.
    #[serde(default)]
    pub provider_issuer: Option<String>,
    /// Browser path to redirect unauthenticated staff navigation to.
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    /// Interval between periodic staff session re-checks, in seconds.
    #[serde(default = "default_recheck_interval")]
    pub recheck_interval_seconds: u64,
    /// Minimum length for portal account passwords.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
}

fn default_provider_cookie() -> String {
    "__session".to_string()
}

fn default_sign_in_path() -> String {
    "/sign-in".to_string()
}

fn default_recheck_interval() -> u64 {
    30
}

fn default_password_min_length() -> u32 {
    10
}
