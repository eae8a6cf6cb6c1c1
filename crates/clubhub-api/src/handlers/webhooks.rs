//! Payment provider webhook handlers.
//!
//! Webhooks are classified Public at the gate — the provider does not
//! hold a staff session. Delivery is idempotent: an unknown reference
//! is acknowledged as a no-op rather than an error.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use clubhub_core::error::AppError;

use crate::dto::request::PaymentWebhookRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/webhooks/payments
pub async fn payments(
    State(state): State<AppState>,
    Json(req): Json<PaymentWebhookRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let updated = state
        .subscription_repo
        .update_by_provider_ref(&req.provider_ref, req.status, req.period_end)
        .await?;

    info!(
        provider_ref = %req.provider_ref,
        status = %req.status,
        updated = updated,
        "Payment webhook processed"
    );

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: if updated > 0 {
            "Subscription updated".to_string()
        } else {
            "No matching subscription".to_string()
        },
    })))
}
