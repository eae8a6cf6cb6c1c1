//! Staff class management handlers.
//!
//! The gate already required staff authentication for these routes; the
//! service layer still re-checks that every addressed class belongs to
//! the caller's own club before reading or mutating it.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use clubhub_core::error::AppError;
use clubhub_entity::class::NewClass;

use crate::dto::request::CreateClassRequest;
use crate::dto::response::{ApiResponse, ClassResponse, MessageResponse};
use crate::extractors::StaffAuth;
use crate::state::AppState;

/// GET /api/classes
pub async fn list_classes(
    State(state): State<AppState>,
    auth: StaffAuth,
) -> Result<Json<ApiResponse<Vec<ClassResponse>>>, AppError> {
    let classes = state.class_service.list(&auth.subject).await?;
    Ok(Json(ApiResponse::ok(
        classes.into_iter().map(ClassResponse::from).collect(),
    )))
}

/// POST /api/classes
pub async fn create_class(
    State(state): State<AppState>,
    auth: StaffAuth,
    Json(req): Json<CreateClassRequest>,
) -> Result<Json<ApiResponse<ClassResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let class = state
        .class_service
        .create(
            &auth.subject,
            NewClass {
                name: req.name,
                coach_name: req.coach_name,
                weekday: req.weekday,
                start_time: req.start_time,
                capacity: req.capacity,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(ClassResponse::from(class))))
}

/// GET /api/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    auth: StaffAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ClassResponse>>, AppError> {
    let class = state.class_service.get(&auth.subject, id).await?;
    Ok(Json(ApiResponse::ok(ClassResponse::from(class))))
}

/// DELETE /api/classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    auth: StaffAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.class_service.delete(&auth.subject, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Class deleted".to_string(),
    })))
}
