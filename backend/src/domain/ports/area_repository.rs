//! Port abstraction for the area hierarchy.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Area;

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AreaRepository: Send + Sync {
    /// Areas without a parent, ordered by name.
    async fn list_top_level(&self) -> Result<Vec<Area>, RepositoryError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Area>, RepositoryError>;

    /// Direct children of an area, ordered by name.
    async fn list_children(&self, parent_id: &Uuid) -> Result<Vec<Area>, RepositoryError>;

    async fn create(&self, area: &Area) -> Result<(), RepositoryError>;

    /// Remove an area; returns `false` when nothing matched.
    ///
    /// Areas that still hold child areas or climbs are refused with
    /// [`RepositoryError::Referenced`].
    async fn delete(&self, id: &Uuid) -> Result<bool, RepositoryError>;
}
