//! Port abstraction for grade persistence on both scales.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Difficulty, DifficultyScale};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DifficultyRepository: Send + Sync {
    /// List the grades of one scale, easiest first.
    async fn list(&self, scale: DifficultyScale) -> Result<Vec<Difficulty>, RepositoryError>;

    /// Fetch one grade.
    async fn find_by_id(
        &self,
        scale: DifficultyScale,
        id: &Uuid,
    ) -> Result<Option<Difficulty>, RepositoryError>;

    async fn create(
        &self,
        scale: DifficultyScale,
        difficulty: &Difficulty,
    ) -> Result<(), RepositoryError>;

    /// Remove a grade; returns `false` when nothing matched.
    ///
    /// Grades still assigned to a boulder or pitch are refused with
    /// [`RepositoryError::Referenced`].
    async fn delete(&self, scale: DifficultyScale, id: &Uuid) -> Result<bool, RepositoryError>;
}
