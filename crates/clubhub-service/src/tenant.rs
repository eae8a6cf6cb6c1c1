//! Tenant-ownership resolution shared by all staff-facing services.

use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_database::repositories::club::ClubRepository;
use clubhub_entity::club::Club;

/// Resolve the club owned by a verified staff subject id.
///
/// Every staff operation starts here: resources are always addressed
/// through the caller's own club, never through a club id taken from the
/// request. An authenticated staff user without a club cannot act on
/// anything.
pub async fn own_club(clubs: &ClubRepository, subject: &str) -> AppResult<Club> {
    clubs
        .find_by_owner_subject(subject)
        .await?
        .ok_or_else(|| AppError::forbidden("No club is registered for this account"))
}
