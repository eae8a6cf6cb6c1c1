//! Staff auth probe handler.

use axum::Json;

use crate::dto::response::{ApiResponse, AuthCheckResponse};
use crate::extractors::StaffAuth;

/// GET /api/auth/check
///
/// The target of the periodic and focus-triggered session re-checks: a
/// long-lived staff view polls this endpoint, and a 401 (issued by the
/// gate before this body runs) tells it to force a redirect to sign-in.
pub async fn check(auth: StaffAuth) -> Json<ApiResponse<AuthCheckResponse>> {
    Json(ApiResponse::ok(AuthCheckResponse {
        authenticated: true,
        subject: Some(auth.subject),
    }))
}
