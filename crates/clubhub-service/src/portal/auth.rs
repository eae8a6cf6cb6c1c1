//! Portal login, logout, and credential-reset flows.
//!
//! These are the only writers of the stored session token and expiry
//! that the session validator checks against.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use clubhub_auth::password::{PasswordHasher, PasswordValidator};
use clubhub_auth::session::cookie::{
    self, MEMBER_SESSION_COOKIE, MEMBER_SUBJECT_FIELD, PARENT_SESSION_COOKIE,
    PARENT_SUBJECT_FIELD, SessionDescriptor,
};
use clubhub_auth::session::token::{generate_session_token, session_expiry};
use clubhub_core::config::session::SessionConfig;
use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_database::repositories::member_account::MemberAccountRepository;
use clubhub_database::repositories::parent_account::ParentAccountRepository;
use clubhub_entity::account::MemberAccount;
use clubhub_entity::parent::ParentAccount;

/// A freshly issued portal session, ready to be set as a cookie.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Name of the cookie to set.
    pub cookie_name: &'static str,
    /// JSON payload the cookie carries.
    pub payload: String,
    /// Expiry of the issued token.
    pub expires_at: DateTime<Utc>,
}

/// Login, logout, and password flows for both portal account classes.
#[derive(Clone)]
pub struct PortalAuthService {
    parents: Arc<ParentAccountRepository>,
    accounts: Arc<MemberAccountRepository>,
    hasher: PasswordHasher,
    policy: PasswordValidator,
    session: SessionConfig,
}

impl std::fmt::Debug for PortalAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalAuthService")
            .field("session", &self.session)
            .finish()
    }
}

impl PortalAuthService {
    /// Create the service over the two account repositories.
    pub fn new(
        parents: Arc<ParentAccountRepository>,
        accounts: Arc<MemberAccountRepository>,
        policy: PasswordValidator,
        session: SessionConfig,
    ) -> Self {
        Self {
            parents,
            accounts,
            hasher: PasswordHasher::new(),
            policy,
            session,
        }
    }

    /// Authenticate a parent and rotate their session token.
    pub async fn parent_login(
        &self,
        club_id: Uuid,
        email: &str,
        password: &str,
    ) -> AppResult<(ParentAccount, IssuedSession)> {
        let account = self
            .parents
            .find_by_email(club_id, email)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Invalid email or password"))?;

        if !self.hasher.verify_password(password, &account.password_hash)? {
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let token = generate_session_token();
        let expires_at = session_expiry(&self.session);
        self.parents
            .set_session(account.id, &token, expires_at)
            .await?;

        info!(parent_id = %account.id, club_id = %account.club_id, "Parent login");

        let session = issued_session(
            PARENT_SESSION_COOKIE,
            PARENT_SUBJECT_FIELD,
            token,
            account.id,
            account.club_id,
            expires_at,
        );
        Ok((account, session))
    }

    /// Revoke a parent's stored session token.
    pub async fn parent_logout(&self, parent_id: Uuid) -> AppResult<()> {
        self.parents.clear_session(parent_id).await?;
        info!(parent_id = %parent_id, "Parent logout");
        Ok(())
    }

    /// Change a parent's password, revoking the current session.
    pub async fn change_parent_password(
        &self,
        parent_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let account = self
            .parents
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?;

        if !self
            .hasher
            .verify_password(current_password, &account.password_hash)?
        {
            return Err(AppError::unauthenticated("Current password is incorrect"));
        }

        self.policy.validate_not_same(current_password, new_password)?;
        self.policy.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        self.parents.update_password(parent_id, &hash).await?;

        info!(parent_id = %parent_id, "Parent password changed");
        Ok(())
    }

    /// Authenticate a member account and rotate its session token.
    pub async fn member_login(
        &self,
        club_id: Uuid,
        email: &str,
        password: &str,
    ) -> AppResult<(MemberAccount, IssuedSession)> {
        let account = self
            .accounts
            .find_by_email(club_id, email)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Invalid email or password"))?;

        if !self.hasher.verify_password(password, &account.password_hash)? {
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let token = generate_session_token();
        let expires_at = session_expiry(&self.session);
        self.accounts
            .set_session(account.id, &token, expires_at)
            .await?;

        info!(account_id = %account.id, club_id = %account.club_id, "Member login");

        let session = issued_session(
            MEMBER_SESSION_COOKIE,
            MEMBER_SUBJECT_FIELD,
            token,
            account.id,
            account.club_id,
            expires_at,
        );
        Ok((account, session))
    }

    /// Revoke a member account's stored session token.
    pub async fn member_logout(&self, account_id: Uuid) -> AppResult<()> {
        self.accounts.clear_session(account_id).await?;
        info!(account_id = %account_id, "Member logout");
        Ok(())
    }

    /// Change a member account's password, revoking the current session.
    pub async fn change_member_password(
        &self,
        account_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Account no longer exists"))?;

        if !self
            .hasher
            .verify_password(current_password, &account.password_hash)?
        {
            return Err(AppError::unauthenticated("Current password is incorrect"));
        }

        self.policy.validate_not_same(current_password, new_password)?;
        self.policy.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        self.accounts.update_password(account_id, &hash).await?;

        info!(account_id = %account_id, "Member password changed");
        Ok(())
    }
}

fn issued_session(
    cookie_name: &'static str,
    subject_field: &str,
    token: String,
    subject_id: Uuid,
    club_id: Uuid,
    expires_at: DateTime<Utc>,
) -> IssuedSession {
    let descriptor = SessionDescriptor {
        token,
        subject_id,
        club_id,
    };
    IssuedSession {
        cookie_name,
        payload: cookie::format_payload(&descriptor, subject_field),
        expires_at,
    }
}
