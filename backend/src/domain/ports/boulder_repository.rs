//! Port abstraction for boulder persistence.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Boulder, NewBoulder};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoulderRepository: Send + Sync {
    /// Every boulder with its grade resolved, ordered by name.
    async fn list(&self) -> Result<Vec<Boulder>, RepositoryError>;

    /// Boulders placed directly in one area, ordered by name.
    async fn list_in_area(&self, area_id: &Uuid) -> Result<Vec<Boulder>, RepositoryError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Boulder>, RepositoryError>;

    async fn create(&self, boulder: &NewBoulder) -> Result<(), RepositoryError>;

    /// Remove a boulder; returns `false` when nothing matched.
    async fn delete(&self, id: &Uuid) -> Result<bool, RepositoryError>;
}
