//! PostgreSQL-backed `DifficultyRepository` implementation using Diesel ORM.
//!
//! The two scales live in separate tables with identical shape; every method
//! dispatches on [`DifficultyScale`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{DifficultyRepository, RepositoryError};
use crate::domain::{Difficulty, DifficultyScale};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_read_error, map_write_error};
use super::diesel_helpers::{decode_difficulty, order_to_column};
use super::models::{
    BoulderDifficultyRow, DifficultyRow, NewBoulderDifficultyRow, NewRouteDifficultyRow,
    RouteDifficultyRow,
};
use super::pool::DbPool;
use super::schema::{boulder_difficulties, route_difficulties};

/// Diesel-backed implementation of the difficulty repository port.
#[derive(Clone)]
pub struct DieselDifficultyRepository {
    pool: DbPool,
}

impl DieselDifficultyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DifficultyRepository for DieselDifficultyRepository {
    async fn list(&self, scale: DifficultyScale) -> Result<Vec<Difficulty>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DifficultyRow> = match scale {
            DifficultyScale::Boulder => boulder_difficulties::table
                .order((
                    boulder_difficulties::sort_order.asc(),
                    boulder_difficulties::name.asc(),
                    boulder_difficulties::id.asc(),
                ))
                .select(BoulderDifficultyRow::as_select())
                .load::<BoulderDifficultyRow>(&mut conn)
                .await
                .map_err(map_read_error)?
                .into_iter()
                .map(DifficultyRow::from)
                .collect(),
            DifficultyScale::Route => route_difficulties::table
                .order((
                    route_difficulties::sort_order.asc(),
                    route_difficulties::name.asc(),
                    route_difficulties::id.asc(),
                ))
                .select(RouteDifficultyRow::as_select())
                .load::<RouteDifficultyRow>(&mut conn)
                .await
                .map_err(map_read_error)?
                .into_iter()
                .map(DifficultyRow::from)
                .collect(),
        };

        rows.into_iter().map(decode_difficulty).collect()
    }

    async fn find_by_id(
        &self,
        scale: DifficultyScale,
        id: &Uuid,
    ) -> Result<Option<Difficulty>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DifficultyRow> = match scale {
            DifficultyScale::Boulder => boulder_difficulties::table
                .filter(boulder_difficulties::id.eq(id))
                .select(BoulderDifficultyRow::as_select())
                .first::<BoulderDifficultyRow>(&mut conn)
                .await
                .optional()
                .map_err(map_read_error)?
                .map(DifficultyRow::from),
            DifficultyScale::Route => route_difficulties::table
                .filter(route_difficulties::id.eq(id))
                .select(RouteDifficultyRow::as_select())
                .first::<RouteDifficultyRow>(&mut conn)
                .await
                .optional()
                .map_err(map_read_error)?
                .map(DifficultyRow::from),
        };

        row.map(decode_difficulty).transpose()
    }

    async fn create(
        &self,
        scale: DifficultyScale,
        difficulty: &Difficulty,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let sort_order = order_to_column(difficulty.order())?;
        let name = difficulty.name().as_ref();

        let inserted = match scale {
            DifficultyScale::Boulder => {
                diesel::insert_into(boulder_difficulties::table)
                    .values(&NewBoulderDifficultyRow {
                        id: difficulty.id(),
                        sort_order,
                        name,
                    })
                    .execute(&mut conn)
                    .await
            }
            DifficultyScale::Route => {
                diesel::insert_into(route_difficulties::table)
                    .values(&NewRouteDifficultyRow {
                        id: difficulty.id(),
                        sort_order,
                        name,
                    })
                    .execute(&mut conn)
                    .await
            }
        };

        inserted
            .map(|_| ())
            .map_err(|err| map_write_error(err, WriteKind::Insert))
    }

    async fn delete(&self, scale: DifficultyScale, id: &Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = match scale {
            DifficultyScale::Boulder => {
                diesel::delete(boulder_difficulties::table.filter(boulder_difficulties::id.eq(id)))
                    .execute(&mut conn)
                    .await
            }
            DifficultyScale::Route => {
                diesel::delete(route_difficulties::table.filter(route_difficulties::id.eq(id)))
                    .execute(&mut conn)
                    .await
            }
        };

        deleted
            .map(|count| count > 0)
            .map_err(|err| map_write_error(err, WriteKind::Delete))
    }
}
