//! Request DTOs.
//!
//! Profile updates deliberately deserialize only the allow-listed
//! fields; anything else a client submits is dropped by serde rather
//! than rejected, so a PATCH carrying an unexpected field still succeeds
//! for the fields that are allowed.

use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use clubhub_entity::subscription::SubscriptionStatus;

/// Portal login request (parent or member account).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PortalLoginRequest {
    /// The club the account belongs to.
    pub club_id: Uuid,
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Portal password change request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    /// The current password, re-verified before any change.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// Allow-listed portal profile update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
    /// New phone number.
    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

/// Class creation request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClassRequest {
    /// Class display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Coach or instructor name.
    #[validate(length(max = 100))]
    pub coach_name: Option<String>,
    /// Weekday the class runs on (0 = Monday .. 6 = Sunday).
    #[validate(range(min = 0, max = 6))]
    pub weekday: i16,
    /// Start time of the class.
    pub start_time: NaiveTime,
    /// Maximum number of enrolled members.
    #[validate(range(min = 1, max = 500))]
    pub capacity: i32,
}

/// Allow-listed club settings update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClubRequest {
    /// New display name.
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    /// New contact email.
    #[validate(email)]
    pub contact_email: Option<String>,
    /// New contact phone.
    #[validate(length(max = 32))]
    pub contact_phone: Option<String>,
}

/// Payment provider webhook payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentWebhookRequest {
    /// The provider's reference for the affected subscription.
    #[validate(length(min = 1))]
    pub provider_ref: String,
    /// New billing status.
    pub status: SubscriptionStatus,
    /// New end of the paid period, when the event carries one.
    pub period_end: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_drops_unexpected_fields() {
        // A client submitting a field outside the allow-list (email
        // here) still gets its allowed fields applied; the extra field
        // never deserializes, so it cannot reach the store.
        let req: UpdateProfileRequest = serde_json::from_str(
            r#"{"phone":"555-0100","email":"new@example.com"}"#,
        )
        .unwrap();

        assert_eq!(req.phone.as_deref(), Some("555-0100"));
        assert!(req.display_name.is_none());
    }

    #[test]
    fn test_profile_update_accepts_partial_payloads() {
        let req: UpdateProfileRequest = serde_json::from_str("{}").unwrap();
        assert!(req.display_name.is_none());
        assert!(req.phone.is_none());
    }
}
