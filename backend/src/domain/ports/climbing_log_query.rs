//! Driving port for reading attempts and todos.

use async_trait::async_trait;

use crate::domain::{Attempt, Error, TodoEntry, UserId};

/// Driving port for climbing-log read operations.
///
/// Listings are unscoped unless a user is given.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), tickle::domain::Error> {
/// use tickle::domain::ports::{ClimbingLogQuery, FixtureClimbingLogQuery};
///
/// let attempts = FixtureClimbingLogQuery.list_attempts(None).await?;
/// assert!(attempts.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClimbingLogQuery: Send + Sync {
    async fn list_attempts(&self, user_id: Option<UserId>) -> Result<Vec<Attempt>, Error>;

    async fn list_todos(&self, user_id: Option<UserId>) -> Result<Vec<TodoEntry>, Error>;
}

/// Fixture query implementation with an empty log.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClimbingLogQuery;

#[async_trait]
impl ClimbingLogQuery for FixtureClimbingLogQuery {
    async fn list_attempts(&self, _user_id: Option<UserId>) -> Result<Vec<Attempt>, Error> {
        Ok(Vec::new())
    }

    async fn list_todos(&self, _user_id: Option<UserId>) -> Result<Vec<TodoEntry>, Error> {
        Ok(Vec::new())
    }
}
