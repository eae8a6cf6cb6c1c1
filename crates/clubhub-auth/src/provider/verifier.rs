//! Verification of provider-issued staff session tokens.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use clubhub_core::config::auth::AuthConfig;

use super::claims::ProviderClaims;

/// Verifies a staff credential and yields the subject id it asserts.
///
/// The provider is opaque to the rest of the system: whatever it does to
/// establish identity, the output is a verified subject id or nothing,
/// which then feeds the same tenant-ownership checks as every other
/// principal class.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a raw credential, returning the subject id or `None` when
    /// the credential is missing, malformed, expired, or forged.
    async fn verify(&self, credential: Option<&str>) -> Option<String>;
}

/// Local verification of the provider's signed session tokens.
#[derive(Clone)]
pub struct ProviderTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for ProviderTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl ProviderTokenVerifier {
    /// Create a verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        if let Some(issuer) = &config.provider_issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.provider_secret.as_bytes()),
            validation,
        }
    }

    fn decode(&self, token: &str) -> Option<ProviderClaims> {
        match decode::<ProviderClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!(error = %e, "Provider token rejected");
                None
            }
        }
    }
}

#[async_trait]
impl IdentityVerifier for ProviderTokenVerifier {
    async fn verify(&self, credential: Option<&str>) -> Option<String> {
        let claims = self.decode(credential?)?;
        if claims.sub.is_empty() {
            return None;
        }
        Some(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            provider_cookie_name: "__session".to_string(),
            provider_secret: secret.to_string(),
            provider_issuer: None,
            sign_in_path: "/sign-in".to_string(),
            recheck_interval_seconds: 30,
            password_min_length: 10,
        }
    }

    fn token(secret: &str, sub: &str, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = ProviderClaims {
            sub: sub.to_string(),
            iss: None,
            iat: now,
            exp: now + exp_offset,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_yields_subject() {
        let verifier = ProviderTokenVerifier::new(&config("secret"));
        let token = token("secret", "staff_42", 3600);
        assert_eq!(
            verifier.verify(Some(&token)).await.as_deref(),
            Some("staff_42")
        );
    }

    #[tokio::test]
    async fn test_missing_credential_yields_none() {
        let verifier = ProviderTokenVerifier::new(&config("secret"));
        assert!(verifier.verify(None).await.is_none());
    }

    #[tokio::test]
    async fn test_forged_token_yields_none() {
        let verifier = ProviderTokenVerifier::new(&config("secret"));
        let token = token("other-secret", "staff_42", 3600);
        assert!(verifier.verify(Some(&token)).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_token_yields_none() {
        let verifier = ProviderTokenVerifier::new(&config("secret"));
        let token = token("secret", "staff_42", -3600);
        assert!(verifier.verify(Some(&token)).await.is_none());
    }

    #[tokio::test]
    async fn test_garbage_yields_none() {
        let verifier = ProviderTokenVerifier::new(&config("secret"));
        assert!(verifier.verify(Some("not-a-jwt")).await.is_none());
    }
}
