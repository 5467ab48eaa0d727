//! Climbing-log domain service.
//!
//! Implements the user, attempt and todo driving ports on top of the
//! repository ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AttemptRepository, ClimbingLogCommand, ClimbingLogQuery, TodoRepository, UserRepository,
};
use crate::domain::{Attempt, Error, Todo, TodoEntry, User, UserId};

/// Climbing-log service implementing [`ClimbingLogQuery`] and
/// [`ClimbingLogCommand`].
pub struct ClimbingLogService<U, A, T> {
    users: Arc<U>,
    attempts: Arc<A>,
    todos: Arc<T>,
}

impl<U, A, T> Clone for ClimbingLogService<U, A, T> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            attempts: Arc::clone(&self.attempts),
            todos: Arc::clone(&self.todos),
        }
    }
}

impl<U, A, T> ClimbingLogService<U, A, T> {
    /// Create the service over the user, attempt and todo repositories.
    pub fn new(users: Arc<U>, attempts: Arc<A>, todos: Arc<T>) -> Self {
        Self {
            users,
            attempts,
            todos,
        }
    }
}

#[async_trait]
impl<U, A, T> ClimbingLogQuery for ClimbingLogService<U, A, T>
where
    U: UserRepository,
    A: AttemptRepository,
    T: TodoRepository,
{
    async fn list_attempts(&self, user_id: Option<UserId>) -> Result<Vec<Attempt>, Error> {
        Ok(self.attempts.list(user_id).await?)
    }

    async fn list_todos(&self, user_id: Option<UserId>) -> Result<Vec<TodoEntry>, Error> {
        Ok(self.todos.list(user_id).await?)
    }
}

#[async_trait]
impl<U, A, T> ClimbingLogCommand for ClimbingLogService<U, A, T>
where
    U: UserRepository,
    A: AttemptRepository,
    T: TodoRepository,
{
    async fn register_user(&self, user: User) -> Result<User, Error> {
        self.users.create(&user).await?;
        Ok(user)
    }

    async fn remove_user(&self, id: UserId) -> Result<(), Error> {
        if self.users.delete(&id).await? {
            Ok(())
        } else {
            Err(Error::not_found(format!("user {id} not found")))
        }
    }

    async fn record_attempt(&self, attempt: Attempt) -> Result<Attempt, Error> {
        self.attempts.create(&attempt).await?;
        Ok(attempt)
    }

    async fn add_todo(&self, todo: Todo) -> Result<Todo, Error> {
        self.todos.create(&todo).await?;
        Ok(todo)
    }
}

#[cfg(test)]
#[path = "climbing_log_service_tests.rs"]
mod tests;
