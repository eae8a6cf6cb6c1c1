//! Subscription repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::subscription::{Subscription, SubscriptionStatus};

/// Repository for subscription query and webhook-update operations.
#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    /// Create a new subscription repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a member's current subscription (the most recently created one).
    pub async fn find_current_by_member(&self, member_id: Uuid) -> AppResult<Option<Subscription>> {
        sqlx::query_as::<_, Subscription>(
            "SELECT * FROM subscriptions WHERE member_id = $1 \
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find subscription", e)
        })
    }

    /// Count active subscriptions in a club.
    pub async fn count_active_by_club(&self, club_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM subscriptions WHERE club_id = $1 AND status = 'active'",
        )
        .bind(club_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count subscriptions", e)
        })
    }

    /// Apply a payment-provider webhook update, keyed by provider reference.
    ///
    /// Returns the number of rows updated (zero when the reference is
    /// unknown, which webhook handlers treat as a no-op).
    pub async fn update_by_provider_ref(
        &self,
        provider_ref: &str,
        status: SubscriptionStatus,
        period_end: Option<DateTime<Utc>>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE subscriptions SET status = $2, \
             period_end = COALESCE($3, period_end), \
             updated_at = NOW() \
             WHERE provider_ref = $1",
        )
        .bind(provider_ref)
        .bind(status)
        .bind(period_end)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update subscription", e)
        })?;
        Ok(result.rows_affected())
    }
}
