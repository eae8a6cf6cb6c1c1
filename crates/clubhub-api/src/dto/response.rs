//! Response DTOs.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubhub_entity::class::Class;
use clubhub_entity::club::{Club, ClubSummary};
use clubhub_entity::portal::{MemberDetail, MemberPrincipal, ParentPrincipal};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Staff session probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCheckResponse {
    /// Whether a valid staff session was presented.
    pub authenticated: bool,
    /// The verified subject id, when authenticated.
    pub subject: Option<String>,
}

/// Portal profile response, shared by both account classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Account ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// The club the account belongs to.
    pub club: ClubSummary,
    /// Linked members with class, subscription, and attendance details.
    pub members: Vec<MemberDetail>,
}

impl From<ParentPrincipal> for ProfileResponse {
    fn from(principal: ParentPrincipal) -> Self {
        Self {
            id: principal.account.id,
            email: principal.account.email,
            display_name: principal.account.display_name,
            phone: principal.account.phone,
            club: principal.club,
            members: principal.members,
        }
    }
}

impl From<MemberPrincipal> for ProfileResponse {
    fn from(principal: MemberPrincipal) -> Self {
        Self {
            id: principal.account.id,
            email: principal.account.email,
            display_name: principal.account.display_name,
            phone: principal.account.phone,
            club: principal.club,
            members: principal.members,
        }
    }
}

/// Class summary for staff responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassResponse {
    /// Class ID.
    pub id: Uuid,
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
}

impl From<Class> for ClassResponse {
    fn from(class: Class) -> Self {
        Self {
            id: class.id,
            name: class.name,
            coach_name: class.coach_name,
            weekday: class.weekday,
            start_time: class.start_time,
            capacity: class.capacity,
            created_at: class.created_at,
        }
    }
}

/// Club settings for staff responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubResponse {
    /// Club ID.
    pub id: Uuid,
    /// Club display name.
    pub name: String,
    /// Contact email.
    pub contact_email: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            id: club.id,
            name: club.name,
            contact_email: club.contact_email,
            contact_phone: club.contact_phone,
        }
    }
}
