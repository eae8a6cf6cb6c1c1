//! Club entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A club — the tenant and isolation boundary of the system.
///
/// Every member, class, subscription, attendance record, and portal
/// account belongs to exactly one club. A club is owned by the staff
/// user whose external-provider subject id equals `owner_subject`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Club {
    /// Unique club identifier.
    pub id: Uuid,
    /// External-provider subject id of the owning staff user.
    pub owner_subject: String,
    /// Club display name.
    pub name: String,
    /// Contact email shown to members.
    pub contact_email: Option<String>,
    /// Contact phone shown to members.
    pub contact_phone: Option<String>,
    /// When the club was created.
    pub created_at: DateTime<Utc>,
    /// When the club was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Club {
    /// Check whether the given external subject id owns this club.
    pub fn is_owned_by(&self, subject: &str) -> bool {
        self.owner_subject == subject
    }
}

/// Minimal club projection embedded in portal responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClubSummary {
    /// Club identifier.
    pub id: Uuid,
    /// Club display name.
    pub name: String,
}

/// Mutable club fields for the owner's settings page.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClub {
    /// New display name.
    pub name: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
    /// New contact phone.
    pub contact_phone: Option<String>,
}
