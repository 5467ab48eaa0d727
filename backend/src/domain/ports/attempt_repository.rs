//! Port abstraction for the attempt log.
use async_trait::async_trait;

use crate::domain::{Attempt, UserId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Attempts ordered by date then id, optionally for one user only.
    async fn list(&self, user_id: Option<UserId>) -> Result<Vec<Attempt>, RepositoryError>;

    async fn create(&self, attempt: &Attempt) -> Result<(), RepositoryError>;
}
