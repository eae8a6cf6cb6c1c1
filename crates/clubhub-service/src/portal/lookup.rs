//! Account lookups backing the generic session validator.
//!
//! One lookup per portal principal class. Each loads the account, its
//! club summary, and its linked members — every member carrying its
//! class reference, redacted subscription snapshot, and the ten most
//! recent attendance entries — so a validated principal arrives in
//! handlers fully populated.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use clubhub_auth::session::cookie::{
    self, MEMBER_SESSION_COOKIE, MEMBER_SUBJECT_FIELD, PARENT_SESSION_COOKIE,
    PARENT_SUBJECT_FIELD, SessionDescriptor,
};
use clubhub_auth::session::{SessionLookup, StoredCredentials};
use clubhub_core::result::AppResult;
use clubhub_database::repositories::attendance::AttendanceRepository;
use clubhub_database::repositories::class::ClassRepository;
use clubhub_database::repositories::club::ClubRepository;
use clubhub_database::repositories::member::MemberRepository;
use clubhub_database::repositories::member_account::MemberAccountRepository;
use clubhub_database::repositories::parent_account::ParentAccountRepository;
use clubhub_database::repositories::subscription::SubscriptionRepository;
use clubhub_entity::member::Member;
use clubhub_entity::portal::{MemberDetail, MemberPrincipal, ParentPrincipal};

/// Repositories shared by both lookups for member projection.
#[derive(Clone)]
struct ProjectionRepos {
    classes: Arc<ClassRepository>,
    subscriptions: Arc<SubscriptionRepository>,
    attendance: Arc<AttendanceRepository>,
}

impl ProjectionRepos {
    /// Project a member row into its portal detail shape.
    async fn project(&self, member: Member) -> AppResult<MemberDetail> {
        let class = match member.class_id {
            Some(class_id) => self.classes.find_ref(class_id).await?,
            None => None,
        };

        // Independent reads; join them rather than serializing.
        let (subscription, recent_attendance) = tokio::try_join!(
            self.subscriptions.find_current_by_member(member.id),
            self.attendance.recent_by_member(member.id),
        )?;

        Ok(MemberDetail {
            id: member.id,
            first_name: member.first_name,
            last_name: member.last_name,
            date_of_birth: member.date_of_birth,
            status: member.status,
            class,
            subscription: subscription.map(Into::into),
            recent_attendance,
        })
    }

    async fn project_all(&self, members: Vec<Member>) -> AppResult<Vec<MemberDetail>> {
        let mut details = Vec::with_capacity(members.len());
        for member in members {
            details.push(self.project(member).await?);
        }
        Ok(details)
    }
}

/// Loads parent principals for session validation.
#[derive(Clone)]
pub struct ParentLookup {
    accounts: Arc<ParentAccountRepository>,
    clubs: Arc<ClubRepository>,
    members: Arc<MemberRepository>,
    projection: ProjectionRepos,
}

impl ParentLookup {
    /// Create a parent lookup over the given repositories.
    pub fn new(
        accounts: Arc<ParentAccountRepository>,
        clubs: Arc<ClubRepository>,
        members: Arc<MemberRepository>,
        classes: Arc<ClassRepository>,
        subscriptions: Arc<SubscriptionRepository>,
        attendance: Arc<AttendanceRepository>,
    ) -> Self {
        Self {
            accounts,
            clubs,
            members,
            projection: ProjectionRepos {
                classes,
                subscriptions,
                attendance,
            },
        }
    }
}

#[async_trait]
impl SessionLookup for ParentLookup {
    type Principal = ParentPrincipal;

    const COOKIE_NAME: &'static str = PARENT_SESSION_COOKIE;

    fn parse(raw: &str) -> Option<SessionDescriptor> {
        cookie::parse_descriptor(raw, PARENT_SUBJECT_FIELD)
    }

    async fn load(&self, subject_id: Uuid) -> AppResult<Option<ParentPrincipal>> {
        let Some(account) = self.accounts.find_by_id(subject_id).await? else {
            return Ok(None);
        };
        let Some(club) = self.clubs.summary_by_id(account.club_id).await? else {
            return Ok(None);
        };

        let members = self.members.list_by_parent(account.id).await?;
        let members = self.projection.project_all(members).await?;

        Ok(Some(ParentPrincipal {
            account,
            club,
            members,
        }))
    }

    fn credentials(principal: &ParentPrincipal) -> StoredCredentials<'_> {
        StoredCredentials {
            token: principal.account.session_token.as_deref(),
            expires_at: principal.account.session_expires_at,
        }
    }

    fn club_id(principal: &ParentPrincipal) -> Uuid {
        principal.account.club_id
    }
}

/// Loads member principals for session validation.
#[derive(Clone)]
pub struct MemberLookup {
    accounts: Arc<MemberAccountRepository>,
    clubs: Arc<ClubRepository>,
    members: Arc<MemberRepository>,
    projection: ProjectionRepos,
}

impl MemberLookup {
    /// Create a member lookup over the given repositories.
    pub fn new(
        accounts: Arc<MemberAccountRepository>,
        clubs: Arc<ClubRepository>,
        members: Arc<MemberRepository>,
        classes: Arc<ClassRepository>,
        subscriptions: Arc<SubscriptionRepository>,
        attendance: Arc<AttendanceRepository>,
    ) -> Self {
        Self {
            accounts,
            clubs,
            members,
            projection: ProjectionRepos {
                classes,
                subscriptions,
                attendance,
            },
        }
    }
}

#[async_trait]
impl SessionLookup for MemberLookup {
    type Principal = MemberPrincipal;

    const COOKIE_NAME: &'static str = MEMBER_SESSION_COOKIE;

    fn parse(raw: &str) -> Option<SessionDescriptor> {
        cookie::parse_descriptor(raw, MEMBER_SUBJECT_FIELD)
    }

    async fn load(&self, subject_id: Uuid) -> AppResult<Option<MemberPrincipal>> {
        let Some(account) = self.accounts.find_by_id(subject_id).await? else {
            return Ok(None);
        };
        let Some(club) = self.clubs.summary_by_id(account.club_id).await? else {
            return Ok(None);
        };

        let members = self.members.list_by_account(account.id).await?;
        let members = self.projection.project_all(members).await?;

        Ok(Some(MemberPrincipal {
            account,
            club,
            members,
        }))
    }

    fn credentials(principal: &MemberPrincipal) -> StoredCredentials<'_> {
        StoredCredentials {
            token: principal.account.session_token.as_deref(),
            expires_at: principal.account.session_expires_at,
        }
    }

    fn club_id(principal: &MemberPrincipal) -> Uuid {
        principal.account.club_id
    }
}
