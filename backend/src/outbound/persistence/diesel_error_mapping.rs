//! Shared Diesel error mapping for the climbing-log repositories.
//!
//! Reads only distinguish connection failures from query failures. Writes
//! also classify constraint violations so the HTTP layer can answer with
//! `400` or `409` instead of `500`.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Which kind of statement produced a database error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteKind {
    Insert,
    Delete,
}

/// Map pool errors into connection failures.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    RepositoryError::connection(message)
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

fn constraint_label(info: &dyn DatabaseErrorInformation) -> String {
    info.constraint_name()
        .map_or_else(|| info.message().to_owned(), ToOwned::to_owned)
}

/// Map errors raised by read-only queries.
pub(crate) fn map_read_error(error: DieselError) -> RepositoryError {
    log_diesel_error(&error);
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        _ => RepositoryError::query("database error"),
    }
}

/// Map errors raised by inserts and deletes, classifying constraint failures.
///
/// A foreign-key violation means different things per statement: on delete
/// another row still points at the target; on insert the new row points at
/// something that does not exist.
pub(crate) fn map_write_error(error: DieselError, kind: WriteKind) -> RepositoryError {
    log_diesel_error(&error);
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            let label = constraint_label(info.as_ref());
            match kind {
                WriteKind::Delete => {
                    RepositoryError::referenced(format!("record is still in use ({label})"))
                }
                WriteKind::Insert => RepositoryError::missing_reference(format!(
                    "referenced record does not exist ({label})"
                )),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::duplicate(constraint_label(info.as_ref()))
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation,
            info,
        ) => RepositoryError::constraint_violation(constraint_label(info.as_ref())),
        other => map_read_error(other),
    }
}
