//! Parent account repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::parent::ParentAccount;

/// Repository for parent portal account operations.
///
/// Session credentials live on the account row itself; issuing a session
/// is an update of `session_token`/`session_expires_at`, and revoking it
/// is clearing them.
#[derive(Debug, Clone)]
pub struct ParentAccountRepository {
    pool: PgPool,
}

impl ParentAccountRepository {
    /// Create a new parent account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a parent account by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ParentAccount>> {
        sqlx::query_as::<_, ParentAccount>("SELECT * FROM parent_accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find parent account", e)
            })
    }

    /// Find a parent account by login email within a club.
    pub async fn find_by_email(&self, club_id: Uuid, email: &str) -> AppResult<Option<ParentAccount>> {
        sqlx::query_as::<_, ParentAccount>(
            "SELECT * FROM parent_accounts WHERE club_id = $1 AND lower(email) = lower($2)",
        )
        .bind(club_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find parent account", e)
        })
    }

    /// Store a freshly issued session token and its expiry.
    pub async fn set_session(
        &self,
        id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE parent_accounts SET session_token = $2, session_expires_at = $3, \
             last_login_at = NOW(), updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(token)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store session", e))?;
        Ok(())
    }

    /// Clear the stored session token, revoking any outstanding cookie.
    pub async fn clear_session(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE parent_accounts SET session_token = NULL, session_expires_at = NULL, \
             updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear session", e))?;
        Ok(())
    }

    /// Apply an allow-listed profile update.
    ///
    /// Only display name and phone are mutable here; fields left as
    /// `None` keep their stored value.
    pub async fn update_profile(
        &self,
        id: Uuid,
        display_name: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<ParentAccount> {
        sqlx::query_as::<_, ParentAccount>(
            "UPDATE parent_accounts SET \
             display_name = COALESCE($2, display_name), \
             phone = COALESCE($3, phone), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(display_name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }

    /// Replace the password hash and revoke the current session.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE parent_accounts SET password_hash = $2, \
             session_token = NULL, session_expires_at = NULL, \
             updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?;
        Ok(())
    }
}
