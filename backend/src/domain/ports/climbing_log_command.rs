//! Driving port for users, attempts and todos.

use async_trait::async_trait;

use crate::domain::{Attempt, Error, Todo, User, UserId};

/// Driving port for climbing-log write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClimbingLogCommand: Send + Sync {
    async fn register_user(&self, user: User) -> Result<User, Error>;

    /// Remove a user; their attempts and todos go with them.
    async fn remove_user(&self, id: UserId) -> Result<(), Error>;

    /// Record an attempt. Unknown users or climbs fail with `invalid_request`.
    async fn record_attempt(&self, attempt: Attempt) -> Result<Attempt, Error>;

    async fn add_todo(&self, todo: Todo) -> Result<Todo, Error>;
}

/// Fixture command implementation that accepts every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClimbingLogCommand;

#[async_trait]
impl ClimbingLogCommand for FixtureClimbingLogCommand {
    async fn register_user(&self, user: User) -> Result<User, Error> {
        Ok(user)
    }

    async fn remove_user(&self, id: UserId) -> Result<(), Error> {
        Err(Error::not_found(format!("user {id} not found")))
    }

    async fn record_attempt(&self, attempt: Attempt) -> Result<Attempt, Error> {
        Ok(attempt)
    }

    async fn add_todo(&self, todo: Todo) -> Result<Todo, Error> {
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{DisplayName, ErrorCode};

    #[tokio::test]
    async fn fixture_command_echoes_user() {
        let user = User::new(
            UserId::random(),
            DisplayName::new("Ada Lovelace").expect("valid name"),
        );

        let stored = FixtureClimbingLogCommand
            .register_user(user.clone())
            .await
            .expect("fixture accepts");

        assert_eq!(stored, user);
    }

    #[tokio::test]
    async fn fixture_command_cannot_remove_unknown_user() {
        let error = FixtureClimbingLogCommand
            .remove_user(UserId::random())
            .await
            .expect_err("not found");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
