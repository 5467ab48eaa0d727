//! Difficulty grades for boulders and routes.
//!
//! Grades sort by an explicit ordinal rather than by label, so scales such as
//! `5.9 < 5.10a` or `V2 < V10` order correctly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted grade label.
pub const DIFFICULTY_NAME_MAX: usize = 8;
/// Largest ordinal a grade may carry (fits a signed 16-bit column).
pub const DIFFICULTY_ORDER_MAX: u16 = 32_767;

/// The two independent grading scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyScale {
    /// Grades assigned to boulders.
    Boulder,
    /// Grades assigned to route pitches.
    Route,
}

/// Error returned when parsing a difficulty scale from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDifficultyScaleError;

impl fmt::Display for DifficultyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boulder => f.write_str("boulder"),
            Self::Route => f.write_str("route"),
        }
    }
}

impl fmt::Display for ParseDifficultyScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid difficulty scale")
    }
}

impl std::error::Error for ParseDifficultyScaleError {}

impl FromStr for DifficultyScale {
    type Err = ParseDifficultyScaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "boulder" => Ok(Self::Boulder),
            "route" => Ok(Self::Route),
            _ => Err(ParseDifficultyScaleError),
        }
    }
}

/// Validation errors for grade construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyValidationError {
    /// Name is empty or only whitespace.
    EmptyName,
    /// Name exceeds `max` characters.
    NameTooLong { max: usize },
    /// Ordinal is above `max`.
    OrderOutOfRange { max: u16 },
}

impl fmt::Display for DifficultyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "difficulty name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "difficulty name must be at most {max} characters")
            }
            Self::OrderOutOfRange { max } => {
                write!(f, "difficulty order must be between 0 and {max}")
            }
        }
    }
}

impl std::error::Error for DifficultyValidationError {}

/// Short grade label such as `V4` or `5.10a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyName(String);

impl DifficultyName {
    /// Validate and construct a grade label.
    pub fn new(value: impl Into<String>) -> Result<Self, DifficultyValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DifficultyValidationError::EmptyName);
        }
        if value.chars().count() > DIFFICULTY_NAME_MAX {
            return Err(DifficultyValidationError::NameTooLong {
                max: DIFFICULTY_NAME_MAX,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for DifficultyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DifficultyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A single grade on one of the scales.
///
/// ## Invariants
/// - `order` is at most [`DIFFICULTY_ORDER_MAX`].
///
/// # Examples
/// ```
/// use tickle::domain::{Difficulty, DifficultyName};
/// use uuid::Uuid;
///
/// let v4 = Difficulty::new(Uuid::new_v4(), 4, DifficultyName::new("V4").unwrap()).unwrap();
/// assert_eq!(v4.to_string(), "V4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difficulty {
    id: Uuid,
    order: u16,
    name: DifficultyName,
}

impl Difficulty {
    /// Build a grade, rejecting ordinals above [`DIFFICULTY_ORDER_MAX`].
    pub fn new(
        id: Uuid,
        order: u16,
        name: DifficultyName,
    ) -> Result<Self, DifficultyValidationError> {
        if order > DIFFICULTY_ORDER_MAX {
            return Err(DifficultyValidationError::OrderOutOfRange {
                max: DIFFICULTY_ORDER_MAX,
            });
        }
        Ok(Self { id, order, name })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Sort key; higher is harder.
    pub fn order(&self) -> u16 {
        self.order
    }

    /// Display label such as `V4` or `5.10a`.
    pub fn name(&self) -> &DifficultyName {
        &self.name
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
