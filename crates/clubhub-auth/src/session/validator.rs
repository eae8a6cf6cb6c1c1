//! Generic stored-token session validation.
//!
//! The parent and member portals use structurally identical session
//! mechanisms; one generic validator parameterized by cookie name,
//! account lookup, and projection keeps the two paths from drifting
//! apart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use clubhub_core::result::AppResult;

use super::cookie::{SessionDescriptor, parse_descriptor};

/// The stored bearer credentials attached to a loaded principal.
#[derive(Debug, Clone, Copy)]
pub struct StoredCredentials<'a> {
    /// The stored session token, if a session is active.
    pub token: Option<&'a str>,
    /// The stored session expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Account loading and projection for one principal class.
///
/// Implementations load the fully-populated principal (account, club
/// summary, linked members with class reference, subscription snapshot,
/// and recent attendance) in one shot so that a successful validation
/// hands the handler everything its response needs.
#[async_trait]
pub trait SessionLookup: Send + Sync {
    /// The fully-populated principal this lookup produces.
    type Principal: Send + Sync;

    /// Name of the session cookie this principal class reads.
    const COOKIE_NAME: &'static str;

    /// Parse a raw cookie value into a descriptor.
    fn parse(raw: &str) -> Option<SessionDescriptor>;

    /// Load the principal for the given account id, or `None` when no
    /// such account exists.
    async fn load(&self, subject_id: Uuid) -> AppResult<Option<Self::Principal>>;

    /// The stored credentials of a loaded principal.
    fn credentials(principal: &Self::Principal) -> StoredCredentials<'_>;

    /// The club a loaded principal belongs to.
    fn club_id(principal: &Self::Principal) -> Uuid;
}

/// Validates presented session cookies against stored credentials.
///
/// Validation is re-executed on every request; the stored token and
/// expiry can change between requests (logout elsewhere, rotation), so
/// no validity is ever cached.
#[derive(Debug, Clone)]
pub struct SessionValidator<L: SessionLookup> {
    lookup: Arc<L>,
}

impl<L: SessionLookup> SessionValidator<L> {
    /// Create a validator over the given account lookup.
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Name of the cookie this validator reads.
    pub fn cookie_name(&self) -> &'static str {
        L::COOKIE_NAME
    }

    /// Validate a raw cookie value (or its absence).
    ///
    /// Returns `Ok(None)` — unauthenticated — for a missing or malformed
    /// cookie, an unknown account, a token mismatch, a club mismatch, or
    /// a missing/non-future expiry. Returns `Err` only for store
    /// failures, which must surface as internal errors rather than
    /// silent denial or silent success.
    pub async fn validate(&self, raw_cookie: Option<&str>) -> AppResult<Option<L::Principal>> {
        let Some(raw) = raw_cookie else {
            return Ok(None);
        };
        let Some(descriptor) = L::parse(raw) else {
            return Ok(None);
        };

        let Some(principal) = self.lookup.load(descriptor.subject_id).await? else {
            return Ok(None);
        };

        if L::club_id(&principal) != descriptor.club_id {
            return Ok(None);
        }

        if !credentials_match(&descriptor, L::credentials(&principal), Utc::now()) {
            return Ok(None);
        }

        Ok(Some(principal))
    }
}

/// The core session invariant, kept pure for exact boundary testing.
///
/// A descriptor authorizes only when its token exactly equals the stored
/// token and the stored expiry is strictly after `now`; an expiry equal
/// to `now`, or missing entirely, does not.
pub fn credentials_match(
    descriptor: &SessionDescriptor,
    stored: StoredCredentials<'_>,
    now: DateTime<Utc>,
) -> bool {
    match stored.token {
        Some(token) if token == descriptor.token => {}
        _ => return false,
    }
    match stored.expires_at {
        Some(expires_at) => expires_at > now,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashMap;

    use crate::session::cookie::PARENT_SUBJECT_FIELD;

    #[derive(Debug, Clone)]
    struct FakeAccount {
        id: Uuid,
        club_id: Uuid,
        session_token: Option<String>,
        session_expires_at: Option<DateTime<Utc>>,
    }

    struct FakeLookup {
        accounts: HashMap<Uuid, FakeAccount>,
    }

    #[async_trait]
    impl SessionLookup for FakeLookup {
        type Principal = FakeAccount;

        const COOKIE_NAME: &'static str = "parent_session";

        fn parse(raw: &str) -> Option<SessionDescriptor> {
            parse_descriptor(raw, PARENT_SUBJECT_FIELD)
        }

        async fn load(&self, subject_id: Uuid) -> AppResult<Option<FakeAccount>> {
            Ok(self.accounts.get(&subject_id).cloned())
        }

        fn credentials(principal: &FakeAccount) -> StoredCredentials<'_> {
            StoredCredentials {
                token: principal.session_token.as_deref(),
                expires_at: principal.session_expires_at,
            }
        }

        fn club_id(principal: &FakeAccount) -> Uuid {
            principal.club_id
        }
    }

    fn validator_with(account: FakeAccount) -> SessionValidator<FakeLookup> {
        let mut accounts = HashMap::new();
        accounts.insert(account.id, account);
        SessionValidator::new(Arc::new(FakeLookup { accounts }))
    }

    fn cookie_for(token: &str, account: &FakeAccount) -> String {
        format!(
            r#"{{"token":"{token}","parentId":"{}","clubId":"{}"}}"#,
            account.id, account.club_id
        )
    }

    fn account(token: &str, expires_in: Duration) -> FakeAccount {
        FakeAccount {
            id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            session_token: Some(token.to_string()),
            session_expires_at: Some(Utc::now() + expires_in),
        }
    }

    #[tokio::test]
    async fn test_absent_cookie_is_unauthenticated() {
        let validator = validator_with(account("t1", Duration::hours(1)));
        assert!(validator.validate(None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_cookie_is_unauthenticated() {
        let validator = validator_with(account("t1", Duration::hours(1)));
        assert!(validator.validate(Some("garbage")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_account_is_unauthenticated() {
        let stored = account("t1", Duration::hours(1));
        let validator = validator_with(stored.clone());

        let other = FakeAccount {
            id: Uuid::new_v4(),
            ..stored
        };
        let cookie = cookie_for("t1", &other);
        assert!(validator.validate(Some(&cookie)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_valid_session_returns_principal() {
        let stored = account("t1", Duration::hours(1));
        let validator = validator_with(stored.clone());

        let cookie = cookie_for("t1", &stored);
        let principal = validator.validate(Some(&cookie)).await.unwrap().unwrap();
        assert_eq!(principal.id, stored.id);
    }

    #[tokio::test]
    async fn test_token_mismatch_is_unauthenticated() {
        let stored = account("t2", Duration::hours(1));
        let validator = validator_with(stored.clone());

        // Same cookie that was valid before the stored token changed.
        let cookie = cookie_for("t1", &stored);
        assert!(validator.validate(Some(&cookie)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_token_comparison_is_exact() {
        let stored = account("t1", Duration::hours(1));
        let validator = validator_with(stored.clone());

        for presented in ["t", "t1 ", "T1", "t1x"] {
            let cookie = cookie_for(presented, &stored);
            assert!(
                validator.validate(Some(&cookie)).await.unwrap().is_none(),
                "token {presented:?} must not match stored \"t1\""
            );
        }
    }

    #[tokio::test]
    async fn test_expired_session_is_unauthenticated() {
        let stored = account("t1", Duration::hours(-1));
        let validator = validator_with(stored.clone());

        let cookie = cookie_for("t1", &stored);
        assert!(validator.validate(Some(&cookie)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_expiry_is_unauthenticated() {
        let mut stored = account("t1", Duration::hours(1));
        stored.session_expires_at = None;
        let validator = validator_with(stored.clone());

        let cookie = cookie_for("t1", &stored);
        assert!(validator.validate(Some(&cookie)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_club_mismatch_is_unauthenticated() {
        let stored = account("t1", Duration::hours(1));
        let validator = validator_with(stored.clone());

        let mut foreign = stored.clone();
        foreign.club_id = Uuid::new_v4();
        let cookie = cookie_for("t1", &foreign);
        assert!(validator.validate(Some(&cookie)).await.unwrap().is_none());
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let now = Utc::now();
        let descriptor = SessionDescriptor {
            token: "t1".to_string(),
            subject_id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
        };

        // Exactly `now` is already expired; one second later is not.
        let at_now = StoredCredentials {
            token: Some("t1"),
            expires_at: Some(now),
        };
        assert!(!credentials_match(&descriptor, at_now, now));

        let future = StoredCredentials {
            token: Some("t1"),
            expires_at: Some(now + Duration::seconds(1)),
        };
        assert!(credentials_match(&descriptor, future, now));
    }
}
