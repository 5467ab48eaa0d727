//! Port abstraction for to-do lists.
use async_trait::async_trait;

use crate::domain::{Todo, TodoEntry, UserId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Todos joined with their climb names.
    ///
    /// Route todos come first ordered by route name, then boulder todos
    /// ordered by boulder name; ties break on id.
    async fn list(&self, user_id: Option<UserId>) -> Result<Vec<TodoEntry>, RepositoryError>;

    async fn create(&self, todo: &Todo) -> Result<(), RepositoryError>;
}
