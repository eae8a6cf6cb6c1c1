//! Class repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::class::{Class, ClassRef, NewClass};

/// Repository for class CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ClassRepository {
    pool: PgPool,
}

impl ClassRepository {
    /// Create a new class repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a class by ID.
    ///
    /// Deliberately unscoped: callers compare the returned `club_id`
    /// against the authenticated principal's own club before acting.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Class>> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find class", e))
    }

    /// Load the minimal reference projection of a class.
    pub async fn find_ref(&self, id: Uuid) -> AppResult<Option<ClassRef>> {
        sqlx::query_as::<_, ClassRef>("SELECT id, name FROM classes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load class reference", e)
            })
    }

    /// List all classes of a club, ordered by weekday and start time.
    pub async fn list_by_club(&self, club_id: Uuid) -> AppResult<Vec<Class>> {
        sqlx::query_as::<_, Class>(
            "SELECT * FROM classes WHERE club_id = $1 ORDER BY weekday, start_time",
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list classes", e))
    }

    /// Count classes in a club.
    pub async fn count_by_club(&self, club_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM classes WHERE club_id = $1")
            .bind(club_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count classes", e))
    }

    /// Create a new class in the given club.
    pub async fn create(&self, club_id: Uuid, data: &NewClass) -> AppResult<Class> {
        sqlx::query_as::<_, Class>(
            "INSERT INTO classes (club_id, name, coach_name, weekday, start_time, capacity) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(club_id)
        .bind(&data.name)
        .bind(&data.coach_name)
        .bind(data.weekday)
        .bind(data.start_time)
        .bind(data.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create class", e))
    }

    /// Delete a class by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete class", e))?;
        Ok(result.rows_affected() > 0)
    }
}
