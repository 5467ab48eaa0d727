//! Shared row decoding helpers for Diesel repository implementations.
//!
//! Stored rows pass back through the domain constructors, so a row that
//! breaks a domain invariant surfaces as [`RepositoryError::Query`] rather
//! than as a partially valid value.

use uuid::Uuid;

use crate::domain::ports::RepositoryError;
use crate::domain::{ClimbName, Difficulty, DifficultyName, MountainProjectUrl};

use super::models::DifficultyRow;

/// Convert a `SMALLINT` ordinal column into the domain's unsigned order.
pub(crate) fn order_from_column(value: i16) -> Result<u16, RepositoryError> {
    u16::try_from(value)
        .map_err(|_| RepositoryError::query(format!("negative sort order {value} in storage")))
}

/// Convert a domain order into its `SMALLINT` column value.
pub(crate) fn order_to_column(value: u16) -> Result<i16, RepositoryError> {
    i16::try_from(value)
        .map_err(|_| RepositoryError::constraint_violation(format!("sort order {value} out of range")))
}

pub(crate) fn decode_difficulty(row: DifficultyRow) -> Result<Difficulty, RepositoryError> {
    let name = DifficultyName::new(row.name).map_err(|err| RepositoryError::query(err.to_string()))?;
    let order = order_from_column(row.sort_order)?;
    Difficulty::new(row.id, order, name).map_err(|err| RepositoryError::query(err.to_string()))
}

pub(crate) fn decode_climb_name(name: String) -> Result<ClimbName, RepositoryError> {
    ClimbName::new(name).map_err(|err| RepositoryError::query(err.to_string()))
}

pub(crate) fn decode_mountainproject(
    value: Option<String>,
) -> Result<Option<MountainProjectUrl>, RepositoryError> {
    value
        .as_deref()
        .map(MountainProjectUrl::parse)
        .transpose()
        .map_err(|err| RepositoryError::query(err.to_string()))
}

/// Decode a parsed enum column, reporting the offending value on failure.
pub(crate) fn decode_code<T: std::str::FromStr>(
    column: &str,
    id: Uuid,
    value: &str,
) -> Result<T, RepositoryError> {
    value.parse().map_err(|_| {
        RepositoryError::query(format!("row {id} has unknown {column} value {value:?}"))
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ProtectionStyle;
    use rstest::rstest;

    #[rstest]
    #[case(0, Ok(0))]
    #[case(32_767, Ok(32_767))]
    fn order_columns_convert(#[case] raw: i16, #[case] expected: Result<u16, RepositoryError>) {
        assert_eq!(order_from_column(raw), expected);
    }

    #[rstest]
    fn negative_order_is_a_query_error() {
        assert!(matches!(
            order_from_column(-1),
            Err(RepositoryError::Query { .. })
        ));
    }

    #[rstest]
    fn unknown_code_reports_column() {
        let id = Uuid::nil();
        let error = decode_code::<ProtectionStyle>("protection_style", id, "aid")
            .expect_err("unknown style");
        assert!(error.to_string().contains("protection_style"));
    }

    #[rstest]
    fn difficulty_rows_decode() {
        let row = DifficultyRow {
            id: Uuid::new_v4(),
            sort_order: 7,
            name: "V7".to_owned(),
        };
        let difficulty = decode_difficulty(row).expect("valid row");
        assert_eq!(difficulty.order(), 7);
        assert_eq!(difficulty.to_string(), "V7");
    }
}
