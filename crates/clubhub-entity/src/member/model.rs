//! Member entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::MemberStatus;

/// A member (typically a child) enrolled in a club.
///
/// A member may be linked to a parent account, to a self-service member
/// account, or to both. Links are shared references, not ownership: the
/// same parent account can be linked to several members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier.
    pub id: Uuid,
    /// The club this member belongs to.
    pub club_id: Uuid,
    /// Linked parent account, if any.
    pub parent_id: Option<Uuid>,
    /// Linked self-service member account, if any.
    pub account_id: Option<Uuid>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Current class, if assigned.
    pub class_id: Option<Uuid>,
    /// Enrollment status.
    pub status: MemberStatus,
    /// When the member was created.
    pub created_at: DateTime<Utc>,
    /// When the member was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
