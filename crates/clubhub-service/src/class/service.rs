//! Staff class CRUD with per-operation tenant ownership checks.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use clubhub_core::error::AppError;
use clubhub_core::result::AppResult;
use clubhub_database::repositories::class::ClassRepository;
use clubhub_database::repositories::club::ClubRepository;
use clubhub_entity::class::{Class, NewClass};

use crate::tenant::own_club;

/// Class CRUD scoped to the authenticated staff caller's own club.
///
/// Every operation that addresses a class by id re-checks that the
/// class's club is owned by the caller, even though the gate already
/// required staff authentication: a foreign-club class yields Forbidden
/// whether or not the gate was satisfied.
#[derive(Debug, Clone)]
pub struct ClassService {
    clubs: Arc<ClubRepository>,
    classes: Arc<ClassRepository>,
}

impl ClassService {
    /// Create the service over the given repositories.
    pub fn new(clubs: Arc<ClubRepository>, classes: Arc<ClassRepository>) -> Self {
        Self { clubs, classes }
    }

    /// List the caller's own classes.
    pub async fn list(&self, subject: &str) -> AppResult<Vec<Class>> {
        let club = own_club(&self.clubs, subject).await?;
        self.classes.list_by_club(club.id).await
    }

    /// Create a class in the caller's own club.
    pub async fn create(&self, subject: &str, data: NewClass) -> AppResult<Class> {
        let club = own_club(&self.clubs, subject).await?;
        let class = self.classes.create(club.id, &data).await?;
        info!(class_id = %class.id, club_id = %club.id, "Class created");
        Ok(class)
    }

    /// Load a class, enforcing ownership.
    pub async fn get(&self, subject: &str, class_id: Uuid) -> AppResult<Class> {
        let club = own_club(&self.clubs, subject).await?;
        self.authorize(&club.id, class_id).await
    }

    /// Delete a class, enforcing ownership.
    pub async fn delete(&self, subject: &str, class_id: Uuid) -> AppResult<()> {
        let club = own_club(&self.clubs, subject).await?;
        let class = self.authorize(&club.id, class_id).await?;

        self.classes.delete(class.id).await?;
        info!(class_id = %class.id, club_id = %club.id, "Class deleted");
        Ok(())
    }

    /// Load a class and check it belongs to the caller's club.
    ///
    /// A class that exists under another club is Forbidden, regardless of
    /// anything else; only a class absent from the store entirely is
    /// NotFound.
    async fn authorize(&self, own_club_id: &Uuid, class_id: Uuid) -> AppResult<Class> {
        let Some(class) = self.classes.find_by_id(class_id).await? else {
            return Err(AppError::not_found("Class not found"));
        };
        if class.club_id != *own_club_id {
            return Err(AppError::forbidden("Class belongs to another club"));
        }
        Ok(class)
    }
}
