//! Driving port for catalogue reads.
//!
//! Inbound adapters use this port to browse areas, grades and climbs without
//! depending on repository details.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Area, AreaDetail, Boulder, Difficulty, DifficultyScale, Error, Route};

/// Driving port for catalogue read operations.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), tickle::domain::Error> {
/// use tickle::domain::ports::{CatalogueQuery, FixtureCatalogueQuery};
///
/// let areas = FixtureCatalogueQuery.list_top_level_areas().await?;
/// assert!(areas.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Areas with no parent, ordered by name.
    async fn list_top_level_areas(&self) -> Result<Vec<Area>, Error>;

    /// One area with its children and the climbs placed directly in it.
    ///
    /// Unknown ids fail with `not_found`.
    async fn area_detail(&self, id: Uuid) -> Result<AreaDetail, Error>;

    async fn list_boulders(&self) -> Result<Vec<Boulder>, Error>;

    async fn get_boulder(&self, id: Uuid) -> Result<Boulder, Error>;

    async fn list_routes(&self) -> Result<Vec<Route>, Error>;

    async fn get_route(&self, id: Uuid) -> Result<Route, Error>;

    /// Grades of one scale ordered by ordinal.
    async fn list_difficulties(&self, scale: DifficultyScale) -> Result<Vec<Difficulty>, Error>;
}

/// Fixture query implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueQuery;

#[async_trait]
impl CatalogueQuery for FixtureCatalogueQuery {
    async fn list_top_level_areas(&self) -> Result<Vec<Area>, Error> {
        Ok(Vec::new())
    }

    async fn area_detail(&self, id: Uuid) -> Result<AreaDetail, Error> {
        Err(Error::not_found(format!("area {id} not found")))
    }

    async fn list_boulders(&self) -> Result<Vec<Boulder>, Error> {
        Ok(Vec::new())
    }

    async fn get_boulder(&self, id: Uuid) -> Result<Boulder, Error> {
        Err(Error::not_found(format!("boulder {id} not found")))
    }

    async fn list_routes(&self) -> Result<Vec<Route>, Error> {
        Ok(Vec::new())
    }

    async fn get_route(&self, id: Uuid) -> Result<Route, Error> {
        Err(Error::not_found(format!("route {id} not found")))
    }

    async fn list_difficulties(&self, _scale: DifficultyScale) -> Result<Vec<Difficulty>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_query_reports_missing_route() {
        let error = FixtureCatalogueQuery
            .get_route(Uuid::new_v4())
            .await
            .expect_err("not found");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn fixture_query_lists_nothing() {
        let grades = FixtureCatalogueQuery
            .list_difficulties(DifficultyScale::Boulder)
            .await
            .expect("fixture list succeeds");

        assert!(grades.is_empty());
    }
}
