//! Class entity model.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recurring training class offered by a club.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Class {
    /// Unique class identifier.
    pub id: Uuid,
    /// The club this class belongs to.
    pub club_id: Uuid,
    /// Class display name.
    pub name: String,
    /// Coach or instructor name.
    pub coach_name: Option<String>,
    /// Weekday the class runs on (0 = Monday .. 6 = Sunday).
    pub weekday: i16,
    /// Start time of the class.
    pub start_time: NaiveTime,
    /// Maximum number of enrolled members.
    pub capacity: i32,
    /// When the class was created.
    pub created_at: DateTime<Utc>,
    /// When the class was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Minimal class projection embedded in member details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassRef {
    /// Class identifier.
    pub id: Uuid,
    /// Class display name.
    pub name: String,
}

/// Data required to create a new class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClass {
    /// Class display name.
    pub name: String,
    /// Coach or instructor name.
    pub coach_name: Option<String>,
    /// Weekday the class runs on (0 = Monday .. 6 = Sunday).
    pub weekday: i16,
    /// Start time of the class.
    pub start_time: NaiveTime,
    /// Maximum number of enrolled members.
    pub capacity: i32,
}
