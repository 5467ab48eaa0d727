//! Errors shared by every climbing-log repository adapter.

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution, or a stored row broke
        /// a domain invariant while decoding.
        Query { message: String } => "repository query failed: {message}",
        /// Delete refused because other rows still point at the target.
        Referenced { message: String } => "record is still referenced: {message}",
        /// Write names a row that does not exist.
        MissingReference { message: String } => "referenced record does not exist: {message}",
        /// Write rejected by a storage check or not-null constraint.
        ConstraintViolation { message: String } => "constraint violated: {message}",
        /// Write collides with a unique key.
        Duplicate { message: String } => "duplicate record: {message}",
    }
}

impl From<RepositoryError> for Error {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Connection { message } => {
                Error::service_unavailable(format!("repository unavailable: {message}"))
            }
            RepositoryError::Query { message } => {
                Error::internal(format!("repository error: {message}"))
            }
            RepositoryError::Referenced { message } => Error::conflict(message),
            RepositoryError::MissingReference { message } => Error::invalid_request(message),
            RepositoryError::ConstraintViolation { message } => Error::invalid_request(message),
            RepositoryError::Duplicate { message } => Error::conflict(message),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(RepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[case(RepositoryError::referenced("boulder has attempts"), ErrorCode::Conflict)]
    #[case(RepositoryError::missing_reference("no such area"), ErrorCode::InvalidRequest)]
    #[case(RepositoryError::constraint_violation("xor"), ErrorCode::InvalidRequest)]
    #[case(RepositoryError::duplicate("pitch order"), ErrorCode::Conflict)]
    fn maps_to_error_codes(#[case] error: RepositoryError, #[case] expected: ErrorCode) {
        assert_eq!(Error::from(error).code(), expected);
    }

    #[rstest]
    fn referenced_keeps_message() {
        let error = Error::from(RepositoryError::referenced("area has children"));
        assert_eq!(error.message(), "area has children");
    }
}
