//! Opaque session token generation.

use chrono::{DateTime, Utc};
use rand::{RngExt, distr::Alphanumeric};

use clubhub_core::config::session::SessionConfig;

/// Length of generated session tokens, in characters.
pub const SESSION_TOKEN_LEN: usize = 48;

/// Generate a fresh opaque session token.
///
/// Tokens are compared with exact string equality; they carry no
/// structure and are only meaningful against the stored copy.
pub fn generate_session_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Compute the expiry for a token issued now.
pub fn session_expiry(config: &SessionConfig) -> DateTime<Utc> {
    Utc::now() + chrono::Duration::hours(config.ttl_hours as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_session_token();
        assert_eq!(token.len(), SESSION_TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_session_token(), generate_session_token());
    }

    #[test]
    fn test_expiry_is_in_the_future() {
        let config = SessionConfig { ttl_hours: 1 };
        assert!(session_expiry(&config) > Utc::now());
    }
}
