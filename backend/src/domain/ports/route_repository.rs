//! Port abstraction for route and pitch persistence.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewRoute, Route};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// Every route with its pitches loaded, ordered by name.
    async fn list(&self) -> Result<Vec<Route>, RepositoryError>;

    /// Routes placed directly in one area, ordered by name.
    async fn list_in_area(&self, area_id: &Uuid) -> Result<Vec<Route>, RepositoryError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Route>, RepositoryError>;

    /// Insert a route and all of its pitches atomically.
    async fn create(&self, route: &NewRoute) -> Result<(), RepositoryError>;

    /// Remove a route and its pitches; returns `false` when nothing matched.
    async fn delete(&self, id: &Uuid) -> Result<bool, RepositoryError>;
}
