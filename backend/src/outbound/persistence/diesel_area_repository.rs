//! PostgreSQL-backed `AreaRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{AreaRepository, RepositoryError};
use crate::domain::{Area, AreaName};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_read_error, map_write_error};
use super::models::{AreaRow, NewAreaRow};
use super::pool::DbPool;
use super::schema::areas;

/// Diesel-backed implementation of the area repository port.
#[derive(Clone)]
pub struct DieselAreaRepository {
    pool: DbPool,
}

impl DieselAreaRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_area(row: AreaRow) -> Result<Area, RepositoryError> {
    let AreaRow {
        id,
        name,
        parent_id,
    } = row;
    let name = AreaName::new(name).map_err(|err| RepositoryError::query(err.to_string()))?;
    Area::new(id, name, parent_id).map_err(|err| RepositoryError::query(err.to_string()))
}

fn rows_to_areas(rows: Vec<AreaRow>) -> Result<Vec<Area>, RepositoryError> {
    rows.into_iter().map(row_to_area).collect()
}

#[async_trait]
impl AreaRepository for DieselAreaRepository {
    async fn list_top_level(&self) -> Result<Vec<Area>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AreaRow> = areas::table
            .filter(areas::parent_id.is_null())
            .order((areas::name.asc(), areas::id.asc()))
            .select(AreaRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows_to_areas(rows)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Area>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = areas::table
            .filter(areas::id.eq(id))
            .select(AreaRow::as_select())
            .first::<AreaRow>(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_area).transpose()
    }

    async fn list_children(&self, parent_id: &Uuid) -> Result<Vec<Area>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AreaRow> = areas::table
            .filter(areas::parent_id.eq(parent_id))
            .order((areas::name.asc(), areas::id.asc()))
            .select(AreaRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows_to_areas(rows)
    }

    async fn create(&self, area: &Area) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(areas::table)
            .values(&NewAreaRow {
                id: area.id(),
                name: area.name().as_ref(),
                parent_id: area.parent_id(),
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, WriteKind::Insert))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(areas::table.filter(areas::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|count| count > 0)
            .map_err(|err| map_write_error(err, WriteKind::Delete))
    }
}
