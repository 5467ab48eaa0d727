//! Driving port for catalogue writes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    Area, Boulder, Difficulty, DifficultyScale, Error, NewBoulder, NewRoute, Route,
};

/// Driving port for creating and removing catalogue entries.
///
/// Deletes of rows that other rows still reference fail with `conflict`;
/// deletes of unknown ids fail with `not_found`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueCommand: Send + Sync {
    async fn create_area(&self, area: Area) -> Result<Area, Error>;

    async fn delete_area(&self, id: Uuid) -> Result<(), Error>;

    async fn create_difficulty(
        &self,
        scale: DifficultyScale,
        difficulty: Difficulty,
    ) -> Result<Difficulty, Error>;

    async fn delete_difficulty(&self, scale: DifficultyScale, id: Uuid) -> Result<(), Error>;

    /// Store a boulder and return it with its grade resolved.
    async fn create_boulder(&self, boulder: NewBoulder) -> Result<Boulder, Error>;

    async fn delete_boulder(&self, id: Uuid) -> Result<(), Error>;

    /// Store a route with its pitches in one transaction and return it with
    /// its derived grade.
    async fn create_route(&self, route: NewRoute) -> Result<Route, Error>;

    async fn delete_route(&self, id: Uuid) -> Result<(), Error>;
}

/// Fixture command implementation that echoes areas and grades back.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueCommand;

#[async_trait]
impl CatalogueCommand for FixtureCatalogueCommand {
    async fn create_area(&self, area: Area) -> Result<Area, Error> {
        Ok(area)
    }

    async fn delete_area(&self, id: Uuid) -> Result<(), Error> {
        Err(Error::not_found(format!("area {id} not found")))
    }

    async fn create_difficulty(
        &self,
        _scale: DifficultyScale,
        difficulty: Difficulty,
    ) -> Result<Difficulty, Error> {
        Ok(difficulty)
    }

    async fn delete_difficulty(&self, scale: DifficultyScale, id: Uuid) -> Result<(), Error> {
        Err(Error::not_found(format!("{scale} difficulty {id} not found")))
    }

    async fn create_boulder(&self, _boulder: NewBoulder) -> Result<Boulder, Error> {
        Err(Error::service_unavailable("catalogue storage is not configured"))
    }

    async fn delete_boulder(&self, id: Uuid) -> Result<(), Error> {
        Err(Error::not_found(format!("boulder {id} not found")))
    }

    async fn create_route(&self, _route: NewRoute) -> Result<Route, Error> {
        Err(Error::service_unavailable("catalogue storage is not configured"))
    }

    async fn delete_route(&self, id: Uuid) -> Result<(), Error> {
        Err(Error::not_found(format!("route {id} not found")))
    }
}
