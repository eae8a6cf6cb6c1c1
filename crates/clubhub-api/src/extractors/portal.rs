//! Portal principal extractors.
//!
//! Each extractor reads its session cookie and runs the stored-token
//! validation on every request. A missing, malformed, mismatched, or
//! expired session is a 401; the handler body never sees it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use clubhub_core::error::AppError;
use clubhub_entity::portal::{MemberPrincipal, ParentPrincipal};

use crate::state::AppState;

/// A validated parent principal.
#[derive(Debug, Clone)]
pub struct ParentAuth(pub ParentPrincipal);

impl FromRequestParts<AppState> for ParentAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let raw = jar
            .get(state.parent_sessions.cookie_name())
            .map(|c| c.value().to_string());

        state
            .parent_sessions
            .validate(raw.as_deref())
            .await?
            .map(ParentAuth)
            .ok_or_else(|| AppError::unauthenticated("Parent session is missing or invalid"))
    }
}

/// A validated member principal.
#[derive(Debug, Clone)]
pub struct MemberAuth(pub MemberPrincipal);

impl FromRequestParts<AppState> for MemberAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let raw = jar
            .get(state.member_sessions.cookie_name())
            .map(|c| c.value().to_string());

        state
            .member_sessions
            .validate(raw.as_deref())
            .await?
            .map(MemberAuth)
            .ok_or_else(|| AppError::unauthenticated("Member session is missing or invalid"))
    }
}
