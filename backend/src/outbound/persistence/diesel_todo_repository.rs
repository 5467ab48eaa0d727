//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.
//!
//! Listing joins both climb tables so todos can be ordered by the name of
//! whichever climb they reference: route todos first by route name, then
//! boulder todos by boulder name, with the id as a final tiebreak. Boulder
//! grades come from the same join; route grades are derived from the
//! pitches, loaded in a second query.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, TodoRepository};
use crate::domain::{
    ClimbRef, Pitch, Protection, Todo, TodoDraft, TodoEntry, TodoStyle, UserId, hardest_pitch,
};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_read_error, map_write_error};
use super::diesel_helpers::{decode_climb_name, decode_code, decode_difficulty};
use super::diesel_route_repository::load_pitches;
use super::models::{BoulderDifficultyRow, DifficultyRow, NewTodoRow, TodoRow};
use super::pool::DbPool;
use super::schema::{boulder_difficulties, boulders, routes, todos};

/// Diesel-backed implementation of the todo repository port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// A todo with its route name, boulder name and boulder grade.
type ListedRow = (TodoRow, Option<String>, Option<String>, Option<BoulderDifficultyRow>);

fn row_to_entry(
    listed: ListedRow,
    pitches_by_route: &HashMap<Uuid, Vec<Pitch>>,
) -> Result<TodoEntry, RepositoryError> {
    let (row, route_name, boulder_name, boulder_difficulty) = listed;
    let TodoRow {
        id,
        user_id,
        notes,
        protection,
        boulder_id,
        route_id,
        style,
    } = row;

    let climb = ClimbRef::from_columns(boulder_id, route_id)
        .map_err(|err| RepositoryError::query(format!("todo {id}: {err}")))?;
    let (climb_name, difficulty) = match climb {
        ClimbRef::Boulder(_) => (
            boulder_name,
            boulder_difficulty
                .map(|row| decode_difficulty(DifficultyRow::from(row)))
                .transpose()?,
        ),
        ClimbRef::Route(route_id) => (
            route_name,
            pitches_by_route
                .get(&route_id)
                .and_then(|pitches| hardest_pitch(pitches))
                .cloned(),
        ),
    };
    let climb_name = climb_name
        .ok_or_else(|| RepositoryError::query(format!("todo {id} references a missing climb")))?;

    let todo = Todo::new(TodoDraft {
        id,
        user_id: UserId::from_uuid(user_id),
        notes,
        protection: decode_code::<Protection>("protection", id, &protection)?,
        climb,
        style: decode_code::<TodoStyle>("style", id, &style)?,
    });
    Ok(TodoEntry::new(todo, decode_climb_name(climb_name)?, difficulty))
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list(&self, user_id: Option<UserId>) -> Result<Vec<TodoEntry>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = todos::table
            .left_join(routes::table.on(todos::route_id.eq(routes::id.nullable())))
            .left_join(boulders::table.on(todos::boulder_id.eq(boulders::id.nullable())))
            .left_join(
                boulder_difficulties::table
                    .on(boulders::difficulty_id.eq(boulder_difficulties::id.nullable())),
            )
            .into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(todos::user_id.eq(*user_id.as_uuid()));
        }

        let rows: Vec<ListedRow> = query
            .order((
                routes::name.nullable().asc().nulls_last(),
                boulders::name.nullable().asc().nulls_last(),
                todos::id.asc(),
            ))
            .select((
                TodoRow::as_select(),
                routes::name.nullable(),
                boulders::name.nullable(),
                Option::<BoulderDifficultyRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        let route_ids: Vec<Uuid> = rows.iter().filter_map(|(row, ..)| row.route_id).collect();
        let pitches_by_route = load_pitches(&mut conn, &route_ids).await?;

        rows.into_iter()
            .map(|listed| row_to_entry(listed, &pitches_by_route))
            .collect()
    }

    async fn create(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let climb = todo.climb();

        diesel::insert_into(todos::table)
            .values(&NewTodoRow {
                id: todo.id(),
                user_id: *todo.user_id().as_uuid(),
                notes: todo.notes(),
                protection: todo.protection().as_str(),
                boulder_id: climb.boulder_id(),
                route_id: climb.route_id(),
                style: todo.style().as_str(),
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, WriteKind::Insert))
    }
}
