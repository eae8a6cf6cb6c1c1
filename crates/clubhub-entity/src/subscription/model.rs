//! Subscription entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::SubscriptionStatus;

/// A member's billing subscription.
///
/// Payment details are recorded from the payment provider's webhooks;
/// portal responses only ever expose the redacted
/// [`SubscriptionSnapshot`](crate::portal::SubscriptionSnapshot).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    /// Unique subscription identifier.
    pub id: Uuid,
    /// The club this subscription belongs to.
    pub club_id: Uuid,
    /// The member being billed for.
    pub member_id: Uuid,
    /// Billing status.
    pub status: SubscriptionStatus,
    /// Billed amount in minor currency units.
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// End of the current paid period.
    pub period_end: Option<DateTime<Utc>>,
    /// Card brand on file, as reported by the payment provider.
    pub payment_method_brand: Option<String>,
    /// Last four digits of the card on file.
    pub payment_method_last4: Option<String>,
    /// Payment provider's reference for this subscription.
    pub provider_ref: Option<String>,
    /// When the subscription was created.
    pub created_at: DateTime<Utc>,
    /// When the subscription was last updated.
    pub updated_at: DateTime<Utc>,
}
