//! Aggregate counts for the staff dashboard.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use clubhub_core::result::AppResult;
use clubhub_database::repositories::attendance::AttendanceRepository;
use clubhub_database::repositories::class::ClassRepository;
use clubhub_database::repositories::club::ClubRepository;
use clubhub_database::repositories::member::MemberRepository;
use clubhub_database::repositories::subscription::SubscriptionRepository;

use crate::tenant::own_club;

/// Aggregate counts shown on the staff dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Active members in the club.
    pub member_count: i64,
    /// Classes offered by the club.
    pub class_count: i64,
    /// Subscriptions currently active.
    pub active_subscription_count: i64,
    /// Attendance records taken today.
    pub attendance_today: i64,
}

/// Computes dashboard aggregates scoped to the caller's own club.
#[derive(Debug, Clone)]
pub struct DashboardService {
    clubs: Arc<ClubRepository>,
    members: Arc<MemberRepository>,
    classes: Arc<ClassRepository>,
    subscriptions: Arc<SubscriptionRepository>,
    attendance: Arc<AttendanceRepository>,
}

impl DashboardService {
    /// Create the service over the given repositories.
    pub fn new(
        clubs: Arc<ClubRepository>,
        members: Arc<MemberRepository>,
        classes: Arc<ClassRepository>,
        subscriptions: Arc<SubscriptionRepository>,
        attendance: Arc<AttendanceRepository>,
    ) -> Self {
        Self {
            clubs,
            members,
            classes,
            subscriptions,
            attendance,
        }
    }

    /// Compute the dashboard summary for the caller's own club.
    ///
    /// The four counts are independent reads; they are issued
    /// concurrently and all complete before a response is produced.
    pub async fn summary(&self, subject: &str) -> AppResult<DashboardSummary> {
        let club = own_club(&self.clubs, subject).await?;
        let today = Utc::now().date_naive();

        let (member_count, class_count, active_subscription_count, attendance_today) = tokio::try_join!(
            self.members.count_active_by_club(club.id),
            self.classes.count_by_club(club.id),
            self.subscriptions.count_active_by_club(club.id),
            self.attendance.count_by_club_on(club.id, today),
        )?;

        Ok(DashboardSummary {
            member_count,
            class_count,
            active_subscription_count,
            attendance_today,
        })
    }
}
