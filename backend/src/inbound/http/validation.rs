//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` error whose `details` name the
//! offending field, a machine-readable code and, where useful, the value.

use std::fmt::Display;

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{DIFFICULTY_ORDER_MAX, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidDate,
    InvalidValue,
    OutOfRange,
    ExactlyOneClimb,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidValue => "invalid_value",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::ExactlyOneClimb => "exactly_one_climb",
        }
    }
}

/// Request field name as it appears in JSON bodies and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

pub(crate) fn parse_optional_uuid(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<Uuid>, Error> {
    value.map(|raw| parse_uuid(raw, field)).transpose()
}

/// Use the supplied id or mint a fresh one.
pub(crate) fn parse_or_generate_id(value: Option<String>, field: FieldName) -> Result<Uuid, Error> {
    Ok(parse_optional_uuid(value, field)?.unwrap_or_else(Uuid::new_v4))
}

pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        ValidationError::new(name, format!("{name} must be a YYYY-MM-DD date"))
            .with_value(ErrorCode::InvalidDate, value.as_str())
    })
}

/// Parse a string code such as `"trad"` into its domain enum.
pub(crate) fn parse_code<T: std::str::FromStr>(value: String, field: FieldName) -> Result<T, Error> {
    value.parse().map_err(|_| {
        let name = field.as_str();
        ValidationError::new(name, format!("{name} has an unsupported value"))
            .with_value(ErrorCode::InvalidValue, value.as_str())
    })
}

/// Check an ordinal against the `SMALLINT` range used for grades and pitches.
pub(crate) fn parse_order(value: i32, field: FieldName) -> Result<u16, Error> {
    u16::try_from(value)
        .ok()
        .filter(|order| *order <= DIFFICULTY_ORDER_MAX)
        .ok_or_else(|| {
            let name = field.as_str();
            ValidationError::new(
                name,
                format!("{name} must be between 0 and {DIFFICULTY_ORDER_MAX}"),
            )
            .with_value(ErrorCode::OutOfRange, value.to_string())
        })
}

/// Wrap a domain validation failure for one field.
pub(crate) fn field_error(field: FieldName, err: impl Display) -> Error {
    ValidationError::new(field.as_str(), err.to_string()).with_code(ErrorCode::InvalidValue)
}

pub(crate) fn exactly_one_climb_error() -> Error {
    ValidationError::new(
        "boulderId",
        "exactly one of boulderId and routeId must be set",
    )
    .with_code(ErrorCode::ExactlyOneClimb)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ProtectionStyle;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("routeId");

    #[rstest]
    fn invalid_uuid_reports_field_and_value() {
        let error = parse_uuid("nope".to_owned(), FIELD).expect_err("invalid uuid");
        let details = error.details().expect("details present");

        assert_eq!(details["field"], "routeId");
        assert_eq!(details["value"], "nope");
        assert_eq!(details["code"], "invalid_uuid");
    }

    #[rstest]
    fn missing_id_is_generated() {
        let id = parse_or_generate_id(None, FIELD).expect("generated");
        assert!(!id.is_nil());
    }

    #[rstest]
    #[case(-1, false)]
    #[case(0, true)]
    #[case(32_767, true)]
    #[case(32_768, false)]
    fn order_range(#[case] raw: i32, #[case] ok: bool) {
        assert_eq!(parse_order(raw, FieldName::new("order")).is_ok(), ok);
    }

    #[rstest]
    fn dates_use_iso_calendar_format() {
        let parsed = parse_date("2024-02-29".to_owned(), FieldName::new("date")).expect("leap day");
        assert_eq!(parsed.to_string(), "2024-02-29");
        assert!(parse_date("29/02/2024".to_owned(), FieldName::new("date")).is_err());
    }

    #[rstest]
    fn unsupported_codes_are_rejected() {
        let error = parse_code::<ProtectionStyle>("aid".to_owned(), FieldName::new("protectionStyle"))
            .expect_err("unknown style");
        let details = error.details().expect("details present");
        assert_eq!(details["code"], "invalid_value");
    }
}
