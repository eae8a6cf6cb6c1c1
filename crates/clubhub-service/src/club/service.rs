//! Staff access to the caller's own club settings.

use std::sync::Arc;

use tracing::info;

use clubhub_core::result::AppResult;
use clubhub_database::repositories::club::ClubRepository;
use clubhub_entity::club::{Club, UpdateClub};

use crate::tenant::own_club;

/// Read and update the authenticated staff caller's own club.
///
/// The club is always resolved from the caller's subject id; there is no
/// way to address another tenant's club through this service.
#[derive(Debug, Clone)]
pub struct ClubService {
    clubs: Arc<ClubRepository>,
}

impl ClubService {
    /// Create the service over the club repository.
    pub fn new(clubs: Arc<ClubRepository>) -> Self {
        Self { clubs }
    }

    /// Load the caller's own club.
    pub async fn get_own(&self, subject: &str) -> AppResult<Club> {
        own_club(&self.clubs, subject).await
    }

    /// Apply an allow-listed settings update to the caller's own club.
    pub async fn update_own(&self, subject: &str, update: UpdateClub) -> AppResult<Club> {
        let club = own_club(&self.clubs, subject).await?;
        let updated = self.clubs.update(club.id, &update).await?;
        info!(club_id = %updated.id, "Club settings updated");
        Ok(updated)
    }
}
