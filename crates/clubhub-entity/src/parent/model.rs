//! Parent account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A parent's self-service portal account, scoped to exactly one club.
///
/// Carries the current session token and its expiry; both are rotated on
/// login and cleared on logout or credential reset. A session presented
/// by a cookie is only valid while it exactly matches the stored token
/// and the stored expiry is strictly in the future.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParentAccount {
    /// Unique account identifier.
    pub id: Uuid,
    /// The club this account belongs to.
    pub club_id: Uuid,
    /// Login email, unique within the club.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name shown in the portal.
    pub display_name: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Current session bearer token, if a session is active.
    #[serde(skip_serializing)]
    pub session_token: Option<String>,
    /// Expiry of the current session token.
    #[serde(skip_serializing)]
    pub session_expires_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}
