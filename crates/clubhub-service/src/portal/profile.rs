//! Profile mutation for portal accounts.
//!
//! Reads need no service call: a validated principal already carries the
//! full profile projection. Updates go through here so the allow-list is
//! enforced in exactly one place, and the mutation always targets the
//! authenticated caller's own row.

use std::sync::Arc;

use uuid::Uuid;

use clubhub_core::result::AppResult;
use clubhub_database::repositories::member_account::MemberAccountRepository;
use clubhub_database::repositories::parent_account::ParentAccountRepository;
use clubhub_entity::account::MemberAccount;
use clubhub_entity::parent::ParentAccount;

/// The allow-listed mutable profile fields.
///
/// Anything else a client submits never reaches this struct; unknown
/// fields are dropped during deserialization rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name, if submitted.
    pub display_name: Option<String>,
    /// New phone number, if submitted.
    pub phone: Option<String>,
}

/// Applies allow-listed profile updates for both portal account classes.
#[derive(Debug, Clone)]
pub struct PortalProfileService {
    parents: Arc<ParentAccountRepository>,
    accounts: Arc<MemberAccountRepository>,
}

impl PortalProfileService {
    /// Create the service over the two account repositories.
    pub fn new(
        parents: Arc<ParentAccountRepository>,
        accounts: Arc<MemberAccountRepository>,
    ) -> Self {
        Self { parents, accounts }
    }

    /// Update the calling parent's own profile.
    pub async fn update_parent_profile(
        &self,
        parent_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<ParentAccount> {
        self.parents
            .update_profile(
                parent_id,
                update.display_name.as_deref(),
                update.phone.as_deref(),
            )
            .await
    }

    /// Update the calling member account's own profile.
    pub async fn update_member_profile(
        &self,
        account_id: Uuid,
        update: ProfileUpdate,
    ) -> AppResult<MemberAccount> {
        self.accounts
            .update_profile(
                account_id,
                update.display_name.as_deref(),
                update.phone.as_deref(),
            )
            .await
    }
}
