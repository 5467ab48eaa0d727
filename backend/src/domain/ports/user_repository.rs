//! Port abstraction for the local user table.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;

    /// Remove a user together with their attempts and todos; returns `false`
    /// when nothing matched.
    async fn delete(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
