//! PostgreSQL-backed `RouteRepository` implementation using Diesel ORM.
//!
//! Routes are loaded in two queries: the route rows, then every pitch for
//! those routes joined with its grade. The route's own grade is derived in
//! the domain from the loaded pitches and never stored.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, AsyncPgConnection};
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, RouteRepository};
use crate::domain::{NewRoute, Pitch, ProtectionStyle, Route, RouteDraft};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_read_error, map_write_error};
use super::diesel_helpers::{
    decode_climb_name, decode_code, decode_difficulty, decode_mountainproject, order_from_column,
    order_to_column,
};
use super::models::{
    DifficultyRow, NewPitchRow, NewRouteRow, PitchRow, RouteDifficultyRow, RouteRow,
};
use super::pool::DbPool;
use super::schema::{pitches, route_difficulties, routes};

/// Diesel-backed implementation of the route repository port.
#[derive(Clone)]
pub struct DieselRouteRepository {
    pool: DbPool,
}

impl DieselRouteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Which routes a read should return.
enum RouteScope<'a> {
    All,
    InArea(&'a Uuid),
    Id(&'a Uuid),
}

fn row_to_pitch(row: PitchRow, difficulty: RouteDifficultyRow) -> Result<Pitch, RepositoryError> {
    let difficulty = decode_difficulty(DifficultyRow::from(difficulty))?;
    let order = order_from_column(row.sort_order)?;
    Pitch::new(row.id, order, difficulty).map_err(|err| RepositoryError::query(err.to_string()))
}

fn row_to_route(row: RouteRow, pitches: Vec<Pitch>) -> Result<Route, RepositoryError> {
    let RouteRow {
        id,
        name,
        protection_style,
        mountainproject,
        area_id,
    } = row;

    Route::new(RouteDraft {
        id,
        name: decode_climb_name(name)?,
        area_id,
        protection_style: decode_code::<ProtectionStyle>(
            "protection_style",
            id,
            &protection_style,
        )?,
        mountainproject: decode_mountainproject(mountainproject)?,
        pitches,
    })
    .map_err(|err| RepositoryError::query(err.to_string()))
}

pub(super) async fn load_pitches(
    conn: &mut AsyncPgConnection,
    route_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Pitch>>, RepositoryError> {
    if route_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(PitchRow, RouteDifficultyRow)> = pitches::table
        .inner_join(route_difficulties::table)
        .filter(pitches::route_id.eq_any(route_ids))
        .order((pitches::route_id.asc(), pitches::sort_order.asc()))
        .select((PitchRow::as_select(), RouteDifficultyRow::as_select()))
        .load(conn)
        .await
        .map_err(map_read_error)?;

    let mut grouped: HashMap<Uuid, Vec<Pitch>> = HashMap::new();
    for (row, difficulty) in rows {
        let route_id = row.route_id;
        grouped
            .entry(route_id)
            .or_default()
            .push(row_to_pitch(row, difficulty)?);
    }
    Ok(grouped)
}

impl DieselRouteRepository {
    async fn load(&self, scope: RouteScope<'_>) -> Result<Vec<Route>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = routes::table.into_boxed();
        query = match scope {
            RouteScope::All => query,
            RouteScope::InArea(area_id) => query.filter(routes::area_id.eq(area_id)),
            RouteScope::Id(id) => query.filter(routes::id.eq(id)),
        };

        let rows: Vec<RouteRow> = query
            .order((routes::name.asc(), routes::id.asc()))
            .select(RouteRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        let route_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut pitches_by_route = load_pitches(&mut conn, &route_ids).await?;

        rows.into_iter()
            .map(|row| {
                let pitches = pitches_by_route.remove(&row.id).unwrap_or_default();
                row_to_route(row, pitches)
            })
            .collect()
    }
}

#[async_trait]
impl RouteRepository for DieselRouteRepository {
    async fn list(&self) -> Result<Vec<Route>, RepositoryError> {
        self.load(RouteScope::All).await
    }

    async fn list_in_area(&self, area_id: &Uuid) -> Result<Vec<Route>, RepositoryError> {
        self.load(RouteScope::InArea(area_id)).await
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Route>, RepositoryError> {
        Ok(self.load(RouteScope::Id(id)).await?.into_iter().next())
    }

    async fn create(&self, route: &NewRoute) -> Result<(), RepositoryError> {
        let style = route.protection_style().to_string();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let route_row = NewRouteRow {
            id: route.id(),
            name: route.name().as_ref(),
            protection_style: &style,
            mountainproject: route.mountainproject().map(|url| url.as_str()),
            area_id: route.area_id(),
        };
        let pitch_rows = route
            .pitches()
            .iter()
            .map(|pitch| {
                Ok(NewPitchRow {
                    id: pitch.id,
                    route_id: route.id(),
                    sort_order: order_to_column(pitch.order)?,
                    difficulty_id: pitch.difficulty_id,
                })
            })
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                diesel::insert_into(routes::table)
                    .values(&route_row)
                    .execute(conn)
                    .await?;
                if !pitch_rows.is_empty() {
                    diesel::insert_into(pitches::table)
                        .values(&pitch_rows)
                        .execute(conn)
                        .await?;
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| map_write_error(err, WriteKind::Insert))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(routes::table.filter(routes::id.eq(id)))
            .execute(&mut conn)
            .await
            .map(|count| count > 0)
            .map_err(|err| map_write_error(err, WriteKind::Delete))
    }
}
