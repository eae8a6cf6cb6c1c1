//! Staff club settings handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use clubhub_core::error::AppError;
use clubhub_entity::club::UpdateClub;

use crate::dto::request::UpdateClubRequest;
use crate::dto::response::{ApiResponse, ClubResponse};
use crate::extractors::StaffAuth;
use crate::state::AppState;

/// GET /api/club
pub async fn get_club(
    State(state): State<AppState>,
    auth: StaffAuth,
) -> Result<Json<ApiResponse<ClubResponse>>, AppError> {
    let club = state.club_service.get_own(&auth.subject).await?;
    Ok(Json(ApiResponse::ok(ClubResponse::from(club))))
}

/// PATCH /api/club
pub async fn update_club(
    State(state): State<AppState>,
    auth: StaffAuth,
    Json(req): Json<UpdateClubRequest>,
) -> Result<Json<ApiResponse<ClubResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let club = state
        .club_service
        .update_own(
            &auth.subject,
            UpdateClub {
                name: req.name,
                contact_email: req.contact_email,
                contact_phone: req.contact_phone,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ClubResponse::from(club))))
}
