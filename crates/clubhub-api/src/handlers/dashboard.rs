//! Staff dashboard handler.

use axum::Json;
use axum::extract::State;

use clubhub_core::error::AppError;
use clubhub_service::dashboard::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::extractors::StaffAuth;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn summary(
    State(state): State<AppState>,
    auth: StaffAuth,
) -> Result<Json<ApiResponse<DashboardSummary>>, AppError> {
    let summary = state.dashboard_service.summary(&auth.subject).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
