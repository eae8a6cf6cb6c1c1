//! Attendance entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AttendanceStatus;

/// A single attendance record for a member at a class session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    /// Unique record identifier.
    pub id: Uuid,
    /// The club this record belongs to.
    pub club_id: Uuid,
    /// The member the record is for.
    pub member_id: Uuid,
    /// The class the session belonged to, if still known.
    pub class_id: Option<Uuid>,
    /// Date of the session.
    pub date: NaiveDate,
    /// Recorded outcome.
    pub status: AttendanceStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
