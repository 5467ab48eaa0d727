//! PostgreSQL-backed `BoulderRepository` implementation using Diesel ORM.
//!
//! Boulders are read with a left join on their grade so unrated boulders
//! come back with no difficulty instead of disappearing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{BoulderRepository, RepositoryError};
use crate::domain::{Boulder, BoulderDraft, NewBoulder};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_read_error, map_write_error};
use super::diesel_helpers::{decode_climb_name, decode_difficulty, decode_mountainproject};
use super::models::{BoulderDifficultyRow, BoulderRow, DifficultyRow, NewBoulderRow};
use super::pool::DbPool;
use super::schema::{boulder_difficulties, boulders};

/// Diesel-backed implementation of the boulder repository port.
#[derive(Clone)]
pub struct DieselBoulderRepository {
    pool: DbPool,
}

impl DieselBoulderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Which boulders a read should return.
enum BoulderScope<'a> {
    All,
    InArea(&'a Uuid),
    Id(&'a Uuid),
}

fn row_to_boulder(
    row: BoulderRow,
    difficulty: Option<BoulderDifficultyRow>,
) -> Result<Boulder, RepositoryError> {
    let BoulderRow {
        id,
        name,
        mountainproject,
        area_id,
    } = row;

    Ok(Boulder::new(BoulderDraft {
        id,
        name: decode_climb_name(name)?,
        area_id,
        difficulty: difficulty
            .map(|row| decode_difficulty(DifficultyRow::from(row)))
            .transpose()?,
        mountainproject: decode_mountainproject(mountainproject)?,
    }))
}

impl DieselBoulderRepository {
    async fn load(&self, scope: BoulderScope<'_>) -> Result<Vec<Boulder>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = boulders::table
            .left_join(boulder_difficulties::table)
            .into_boxed();

        query = match scope {
            BoulderScope::All => query,
            BoulderScope::InArea(area_id) => query.filter(boulders::area_id.eq(area_id)),
            BoulderScope::Id(id) => query.filter(boulders::id.eq(id)),
        };

        let rows: Vec<(BoulderRow, Option<BoulderDifficultyRow>)> = query
            .order((boulders::name.asc(), boulders::id.asc()))
            .select((
                BoulderRow::as_select(),
                Option::<BoulderDifficultyRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter()
            .map(|(row, difficulty)| row_to_boulder(row, difficulty))
            .collect()
    }
}

#[async_trait]
impl BoulderRepository for DieselBoulderRepository {
    async fn list(&self) -> Result<Vec<Boulder>, RepositoryError> {
        self.load(BoulderScope::All).await
    }

    async fn list_in_area(&self, area_id: &Uuid) -> Result<Vec<Boulder>, RepositoryError> {
        self.load(BoulderScope::InArea(area_id)).await
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Boulder>, RepositoryError> {
        Ok(self.load(BoulderScope::Id(id)).await?.into_iter().next())
    }

    async fn create(&self, boulder: &NewBoulder) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(boulders::table)
            .values(&NewBoulderRow {
                id: boulder.id,
                name: boulder.name.as_ref(),
                difficulty_id: boulder.difficulty_id,
                mountainproject: boulder.mountainproject.as_ref().map(|url| url.as_str()),
                area_id: boulder.area_id,
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, WriteKind::Insert))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(boulders::table.filter(boulders::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|count| count > 0)
            .map_err(|err| map_write_error(err, WriteKind::Delete))
    }
}
