//! Catalogue domain service.
//!
//! Implements the catalogue driving ports (areas, grades, boulders and
//! routes) on top of the repository ports.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    AreaRepository, BoulderRepository, CatalogueCommand, CatalogueQuery, DifficultyRepository,
    RouteRepository,
};
use crate::domain::{
    Area, AreaDetail, Boulder, Difficulty, DifficultyScale, Error, NewBoulder, NewRoute, Route,
};

/// Catalogue service implementing [`CatalogueQuery`] and [`CatalogueCommand`].
pub struct CatalogueService<A, D, B, R> {
    areas: Arc<A>,
    difficulties: Arc<D>,
    boulders: Arc<B>,
    routes: Arc<R>,
}

impl<A, D, B, R> Clone for CatalogueService<A, D, B, R> {
    fn clone(&self) -> Self {
        Self {
            areas: Arc::clone(&self.areas),
            difficulties: Arc::clone(&self.difficulties),
            boulders: Arc::clone(&self.boulders),
            routes: Arc::clone(&self.routes),
        }
    }
}

impl<A, D, B, R> CatalogueService<A, D, B, R> {
    /// Create a service over the four catalogue repositories.
    pub fn new(areas: Arc<A>, difficulties: Arc<D>, boulders: Arc<B>, routes: Arc<R>) -> Self {
        Self {
            areas,
            difficulties,
            boulders,
            routes,
        }
    }
}

fn missing(kind: &str, id: Uuid) -> Error {
    Error::not_found(format!("{kind} {id} not found"))
}

fn require_deleted(deleted: bool, kind: &str, id: Uuid) -> Result<(), Error> {
    if deleted { Ok(()) } else { Err(missing(kind, id)) }
}

#[async_trait]
impl<A, D, B, R> CatalogueQuery for CatalogueService<A, D, B, R>
where
    A: AreaRepository,
    D: DifficultyRepository,
    B: BoulderRepository,
    R: RouteRepository,
{
    async fn list_top_level_areas(&self) -> Result<Vec<Area>, Error> {
        Ok(self.areas.list_top_level().await?)
    }

    async fn area_detail(&self, id: Uuid) -> Result<AreaDetail, Error> {
        let area = self
            .areas
            .find_by_id(&id)
            .await?
            .ok_or_else(|| missing("area", id))?;
        let children = self.areas.list_children(&id).await?;
        let boulders = self.boulders.list_in_area(&id).await?;
        let routes = self.routes.list_in_area(&id).await?;
        Ok(AreaDetail {
            area,
            children,
            boulders,
            routes,
        })
    }

    async fn list_boulders(&self) -> Result<Vec<Boulder>, Error> {
        Ok(self.boulders.list().await?)
    }

    async fn get_boulder(&self, id: Uuid) -> Result<Boulder, Error> {
        self.boulders
            .find_by_id(&id)
            .await?
            .ok_or_else(|| missing("boulder", id))
    }

    async fn list_routes(&self) -> Result<Vec<Route>, Error> {
        Ok(self.routes.list().await?)
    }

    async fn get_route(&self, id: Uuid) -> Result<Route, Error> {
        self.routes
            .find_by_id(&id)
            .await?
            .ok_or_else(|| missing("route", id))
    }

    async fn list_difficulties(&self, scale: DifficultyScale) -> Result<Vec<Difficulty>, Error> {
        Ok(self.difficulties.list(scale).await?)
    }
}

#[async_trait]
impl<A, D, B, R> CatalogueCommand for CatalogueService<A, D, B, R>
where
    A: AreaRepository,
    D: DifficultyRepository,
    B: BoulderRepository,
    R: RouteRepository,
{
    async fn create_area(&self, area: Area) -> Result<Area, Error> {
        self.areas.create(&area).await?;
        Ok(area)
    }

    async fn delete_area(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self.areas.delete(&id).await?;
        require_deleted(deleted, "area", id)
    }

    async fn create_difficulty(
        &self,
        scale: DifficultyScale,
        difficulty: Difficulty,
    ) -> Result<Difficulty, Error> {
        self.difficulties.create(scale, &difficulty).await?;
        Ok(difficulty)
    }

    async fn delete_difficulty(&self, scale: DifficultyScale, id: Uuid) -> Result<(), Error> {
        let deleted = self.difficulties.delete(scale, &id).await?;
        require_deleted(deleted, &format!("{scale} difficulty"), id)
    }

    async fn create_boulder(&self, boulder: NewBoulder) -> Result<Boulder, Error> {
        self.boulders.create(&boulder).await?;
        self.boulders
            .find_by_id(&boulder.id)
            .await?
            .ok_or_else(|| Error::internal(format!("boulder {} vanished after insert", boulder.id)))
    }

    async fn delete_boulder(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self.boulders.delete(&id).await?;
        require_deleted(deleted, "boulder", id)
    }

    async fn create_route(&self, route: NewRoute) -> Result<Route, Error> {
        self.routes.create(&route).await?;
        let id = route.id();
        self.routes
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::internal(format!("route {id} vanished after insert")))
    }

    async fn delete_route(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self.routes.delete(&id).await?;
        require_deleted(deleted, "route", id)
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
