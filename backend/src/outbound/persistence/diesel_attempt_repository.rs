//! PostgreSQL-backed `AttemptRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AttemptRepository, RepositoryError};
use crate::domain::{Attempt, AttemptDraft, AttemptResult, ClimbRef, Protection, UserId};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_read_error, map_write_error};
use super::diesel_helpers::decode_code;
use super::models::{AttemptRow, NewAttemptRow};
use super::pool::DbPool;
use super::schema::attempts;

/// Diesel-backed implementation of the attempt repository port.
#[derive(Clone)]
pub struct DieselAttemptRepository {
    pool: DbPool,
}

impl DieselAttemptRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain attempt.
///
/// A row naming both or neither climb is reported as a query failure.
fn row_to_attempt(row: AttemptRow) -> Result<Attempt, RepositoryError> {
    let AttemptRow {
        id,
        user_id,
        attempted_on,
        notes,
        boulder_id,
        route_id,
        outcome,
        prior_knowledge,
        protection_used,
    } = row;

    let climb = ClimbRef::from_columns(boulder_id, route_id)
        .map_err(|err| RepositoryError::query(format!("attempt {id}: {err}")))?;

    Ok(Attempt::new(AttemptDraft {
        id,
        user_id: UserId::from_uuid(user_id),
        date: attempted_on,
        notes,
        climb,
        result: decode_code::<AttemptResult>("outcome", id, &outcome)?,
        prior_knowledge,
        protection_used: decode_code::<Protection>("protection_used", id, &protection_used)?,
    }))
}

#[async_trait]
impl AttemptRepository for DieselAttemptRepository {
    async fn list(&self, user_id: Option<UserId>) -> Result<Vec<Attempt>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = attempts::table.into_boxed();
        if let Some(user_id) = user_id {
            query = query.filter(attempts::user_id.eq(*user_id.as_uuid()));
        }

        let rows: Vec<AttemptRow> = query
            .order((attempts::attempted_on.asc(), attempts::id.asc()))
            .select(AttemptRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(row_to_attempt).collect()
    }

    async fn create(&self, attempt: &Attempt) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let outcome = attempt.result().to_string();
        let climb = attempt.climb();

        diesel::insert_into(attempts::table)
            .values(&NewAttemptRow {
                id: attempt.id(),
                user_id: *attempt.user_id().as_uuid(),
                attempted_on: attempt.date(),
                notes: attempt.notes(),
                boulder_id: climb.boulder_id(),
                route_id: climb.route_id(),
                outcome: &outcome,
                prior_knowledge: attempt.prior_knowledge(),
                protection_used: attempt.protection_used().as_str(),
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, WriteKind::Insert))
    }
}
