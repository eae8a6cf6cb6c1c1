//! Parent portal handlers.
//!
//! These routes are public at the gate; every handler below enforces its
//! own session via the `ParentAuth` extractor (except login, which is
//! how a session comes to exist). Missing or invalid authentication is
//! always a 401, never a 404.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use clubhub_auth::session::PARENT_SESSION_COOKIE;
use clubhub_core::error::AppError;
use clubhub_service::portal::ProfileUpdate;

use crate::dto::request::{ChangePasswordRequest, PortalLoginRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, MessageResponse, ProfileResponse};
use crate::extractors::ParentAuth;
use crate::state::AppState;

/// POST /api/parent/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<PortalLoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let (_account, session) = state
        .portal_auth
        .parent_login(req.club_id, &req.email, &req.password)
        .await?;

    let cookie = Cookie::build((session.cookie_name, session.payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(MessageResponse {
            message: "Signed in".to_string(),
        })),
    ))
}

/// POST /api/parent/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: ParentAuth,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), AppError> {
    state.portal_auth.parent_logout(auth.0.account.id).await?;

    let removal = Cookie::build((PARENT_SESSION_COOKIE, "")).path("/").build();

    Ok((
        jar.remove(removal),
        Json(ApiResponse::ok(MessageResponse {
            message: "Signed out".to_string(),
        })),
    ))
}

/// POST /api/parent/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: ParentAuth,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state
        .portal_auth
        .change_parent_password(auth.0.account.id, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed. Please sign in again.".to_string(),
    })))
}

/// GET /api/parent/profile
pub async fn get_profile(auth: ParentAuth) -> Json<ApiResponse<ProfileResponse>> {
    Json(ApiResponse::ok(ProfileResponse::from(auth.0)))
}

/// PATCH /api/parent/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: ParentAuth,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let principal = auth.0;
    let account = state
        .profile_service
        .update_parent_profile(
            principal.account.id,
            ProfileUpdate {
                display_name: req.display_name,
                phone: req.phone,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ProfileResponse {
        id: account.id,
        email: account.email,
        display_name: account.display_name,
        phone: account.phone,
        club: principal.club,
        members: principal.members,
    })))
}
