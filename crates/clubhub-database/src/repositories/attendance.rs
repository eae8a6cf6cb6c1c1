//! Attendance repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use clubhub_core::error::{AppError, ErrorKind};
use clubhub_core::result::AppResult;
use clubhub_entity::portal::AttendanceEntry;

/// How many recent attendance entries portal responses include.
pub const RECENT_ATTENDANCE_LIMIT: i64 = 10;

/// Repository for attendance query operations.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    /// Create a new attendance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a member's most recent attendance entries, newest first.
    pub async fn recent_by_member(&self, member_id: Uuid) -> AppResult<Vec<AttendanceEntry>> {
        sqlx::query_as::<_, AttendanceEntry>(
            "SELECT a.date, a.status, c.name AS class_name \
             FROM attendance a \
             LEFT JOIN classes c ON c.id = a.class_id \
             WHERE a.member_id = $1 \
             ORDER BY a.date DESC, a.created_at DESC \
             LIMIT $2",
        )
        .bind(member_id)
        .bind(RECENT_ATTENDANCE_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load attendance", e)
        })
    }

    /// Count attendance records for a club on the given date.
    pub async fn count_by_club_on(&self, club_id: Uuid, date: NaiveDate) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM attendance WHERE club_id = $1 AND date = $2",
        )
        .bind(club_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count attendance", e)
        })
    }
}
