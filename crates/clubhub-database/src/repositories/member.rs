//! Member repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::member::Member;

/// Repository for member query operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all members linked to a parent account.
    pub async fn list_by_parent(&self, parent_id: Uuid) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE parent_id = $1 ORDER BY first_name, last_name",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list members by parent", e)
        })
    }

    /// List all members linked to a self-service member account.
    pub async fn list_by_account(&self, account_id: Uuid) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE account_id = $1 ORDER BY first_name, last_name",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list members by account", e)
        })
    }

    /// Count active members in a club.
    pub async fn count_active_by_club(&self, club_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM members WHERE club_id = $1 AND status = 'active'",
        )
        .bind(club_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count members", e))
    }
}
