//! Fully-populated portal principals and their member projections.
//!
//! These are the shapes the session validator returns and the profile
//! endpoints serve. Subscriptions are deliberately redacted to
//! status/amount/period-end; payment method details never leave the
//! staff-facing side.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::account::MemberAccount;
use crate::attendance::AttendanceStatus;
use crate::class::ClassRef;
use crate::club::ClubSummary;
use crate::member::MemberStatus;
use crate::parent::ParentAccount;

/// Redacted view of a member's subscription for portal responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    /// Billing status.
    pub status: crate::subscription::SubscriptionStatus,
    /// Billed amount in minor currency units.
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// End of the current paid period.
    pub period_end: Option<DateTime<Utc>>,
}

impl From<crate::subscription::Subscription> for SubscriptionSnapshot {
    fn from(sub: crate::subscription::Subscription) -> Self {
        Self {
            status: sub.status,
            amount_cents: sub.amount_cents,
            currency: sub.currency,
            period_end: sub.period_end,
        }
    }
}

/// A single attendance entry as shown in the portal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceEntry {
    /// Date of the session.
    pub date: NaiveDate,
    /// Recorded outcome.
    pub status: AttendanceStatus,
    /// Name of the class the session belonged to, if still known.
    pub class_name: Option<String>,
}

/// A linked member as projected into portal responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDetail {
    /// Member identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Enrollment status.
    pub status: MemberStatus,
    /// Current class, if assigned.
    pub class: Option<ClassRef>,
    /// Redacted subscription snapshot, if one exists.
    pub subscription: Option<SubscriptionSnapshot>,
    /// Up to ten most recent attendance entries, newest first.
    pub recent_attendance: Vec<AttendanceEntry>,
}

/// A validated parent principal with everything its portal pages need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentPrincipal {
    /// The authenticated parent account.
    pub account: ParentAccount,
    /// The club the account belongs to.
    pub club: ClubSummary,
    /// Members linked to this parent.
    pub members: Vec<MemberDetail>,
}

/// A validated member principal with everything its portal pages need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberPrincipal {
    /// The authenticated member account.
    pub account: MemberAccount,
    /// The club the account belongs to.
    pub club: ClubSummary,
    /// Members linked to this account.
    pub members: Vec<MemberDetail>,
}
