//! `StaffAuth` extractor — the verified staff subject id.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use clubhub_core::error::AppError;

use crate::state::AppState;

/// Verified staff subject id, inserted into request extensions by the
/// gate middleware once the provider credential checks out.
#[derive(Debug, Clone)]
pub struct StaffSubject(pub String);

/// Extracted staff identity available in handlers.
///
/// Normally satisfied from the gate's extension; falls back to verifying
/// the provider cookie directly so a handler mounted outside the gate
/// still refuses unauthenticated callers.
#[derive(Debug, Clone)]
pub struct StaffAuth {
    /// The external provider's subject id for this staff user.
    pub subject: String,
}

impl FromRequestParts<AppState> for StaffAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(verified) = parts.extensions.get::<StaffSubject>() {
            return Ok(StaffAuth {
                subject: verified.0.clone(),
            });
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let raw = jar
            .get(&state.config.auth.provider_cookie_name)
            .map(|c| c.value().to_string());

        match state.identity_verifier.verify(raw.as_deref()).await {
            Some(subject) => Ok(StaffAuth { subject }),
            None => Err(AppError::unauthenticated("Staff authentication required")),
        }
    }
}
