//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Deleting a user cascades to their attempts and todos in the database.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{User, UserId};

use super::diesel_error_mapping::{WriteKind, map_pool_error, map_write_error};
use super::models::NewUserRow;
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(users::table)
            .values(&NewUserRow {
                id: *user.id().as_uuid(),
                display_name: user.display_name().as_ref(),
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, WriteKind::Insert))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.filter(users::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map(|count| count > 0)
            .map_err(|err| map_write_error(err, WriteKind::Delete))
    }
}
