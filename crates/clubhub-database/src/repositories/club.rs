//! Club repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::club::{Club, ClubSummary, UpdateClub};

/// Repository for club (tenant) operations.
#[derive(Debug, Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    /// Create a new club repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a club by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find club", e))
    }

    /// Find the club owned by the given external subject id.
    pub async fn find_by_owner_subject(&self, subject: &str) -> AppResult<Option<Club>> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE owner_subject = $1")
            .bind(subject)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find club by owner", e)
            })
    }

    /// Load the minimal summary projection of a club.
    pub async fn summary_by_id(&self, id: Uuid) -> AppResult<Option<ClubSummary>> {
        sqlx::query_as::<_, ClubSummary>("SELECT id, name FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load club summary", e)
            })
    }

    /// Apply an allow-listed settings update to a club.
    ///
    /// Fields left as `None` keep their stored value.
    pub async fn update(&self, id: Uuid, update: &UpdateClub) -> AppResult<Club> {
        sqlx::query_as::<_, Club>(
            "UPDATE clubs SET \
             name = COALESCE($2, name), \
             contact_email = COALESCE($3, contact_email), \
             contact_phone = COALESCE($4, contact_phone), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.contact_email)
        .bind(&update.contact_phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update club", e))
    }
}
