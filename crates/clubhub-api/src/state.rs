//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use clubhub_auth::password::PasswordValidator;
use clubhub_auth::provider::{IdentityVerifier, ProviderTokenVerifier};
use clubhub_auth::session::SessionValidator;
use clubhub_core::config::AppConfig;

use clubhub_database::repositories::attendance::AttendanceRepository;
use clubhub_database::repositories::class::ClassRepository;
use clubhub_database::repositories::club::ClubRepository;
use clubhub_database::repositories::member::MemberRepository;
use clubhub_database::repositories::member_account::MemberAccountRepository;
use clubhub_database::repositories::parent_account::ParentAccountRepository;
use clubhub_database::repositories::subscription::SubscriptionRepository;

use clubhub_service::class::ClassService;
use clubhub_service::club::ClubService;
use clubhub_service::dashboard::DashboardService;
use clubhub_service::portal::{MemberLookup, ParentLookup, PortalAuthService, PortalProfileService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Staff identity verification against the external provider
    pub identity_verifier: Arc<dyn IdentityVerifier>,
    /// Parent portal session validator
    pub parent_sessions: Arc<SessionValidator<ParentLookup>>,
    /// Member portal session validator
    pub member_sessions: Arc<SessionValidator<MemberLookup>>,

    // ── Services ─────────────────────────────────────────────
    /// Portal login/logout/password flows
    pub portal_auth: Arc<PortalAuthService>,
    /// Portal profile mutation
    pub profile_service: Arc<PortalProfileService>,
    /// Staff class management
    pub class_service: Arc<ClassService>,
    /// Staff club settings
    pub club_service: Arc<ClubService>,
    /// Staff dashboard aggregates
    pub dashboard_service: Arc<DashboardService>,

    // ── Repositories used directly by handlers ───────────────
    /// Subscription repository (payment webhook updates)
    pub subscription_repo: Arc<SubscriptionRepository>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Wire the full dependency graph from configuration and a pool.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        // Repositories
        let clubs = Arc::new(ClubRepository::new(db_pool.clone()));
        let classes = Arc::new(ClassRepository::new(db_pool.clone()));
        let members = Arc::new(MemberRepository::new(db_pool.clone()));
        let subscriptions = Arc::new(SubscriptionRepository::new(db_pool.clone()));
        let attendance = Arc::new(AttendanceRepository::new(db_pool.clone()));
        let parent_accounts = Arc::new(ParentAccountRepository::new(db_pool.clone()));
        let member_accounts = Arc::new(MemberAccountRepository::new(db_pool.clone()));

        // Auth
        let identity_verifier: Arc<dyn IdentityVerifier> =
            Arc::new(ProviderTokenVerifier::new(&config.auth));

        let parent_lookup = Arc::new(ParentLookup::new(
            Arc::clone(&parent_accounts),
            Arc::clone(&clubs),
            Arc::clone(&members),
            Arc::clone(&classes),
            Arc::clone(&subscriptions),
            Arc::clone(&attendance),
        ));
        let member_lookup = Arc::new(MemberLookup::new(
            Arc::clone(&member_accounts),
            Arc::clone(&clubs),
            Arc::clone(&members),
            Arc::clone(&classes),
            Arc::clone(&subscriptions),
            Arc::clone(&attendance),
        ));

        let parent_sessions = Arc::new(SessionValidator::new(parent_lookup));
        let member_sessions = Arc::new(SessionValidator::new(member_lookup));

        // Services
        let portal_auth = Arc::new(PortalAuthService::new(
            Arc::clone(&parent_accounts),
            Arc::clone(&member_accounts),
            PasswordValidator::new(&config.auth),
            config.session.clone(),
        ));
        let profile_service = Arc::new(PortalProfileService::new(
            Arc::clone(&parent_accounts),
            Arc::clone(&member_accounts),
        ));
        let class_service = Arc::new(ClassService::new(Arc::clone(&clubs), Arc::clone(&classes)));
        let club_service = Arc::new(ClubService::new(Arc::clone(&clubs)));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&clubs),
            Arc::clone(&members),
            Arc::clone(&classes),
            Arc::clone(&subscriptions),
            Arc::clone(&attendance),
        ));

        Self {
            config,
            db_pool,
            identity_verifier,
            parent_sessions,
            member_sessions,
            portal_auth,
            profile_service,
            class_service,
            club_service,
            dashboard_service,
            subscription_repo: subscriptions,
        }
    }
}
