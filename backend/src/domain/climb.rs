//! Primitives shared by boulders, routes and the log entries that point at
//! them.

use std::fmt;

use url::Url;
use uuid::Uuid;

/// Longest accepted boulder or route name.
pub const CLIMB_NAME_MAX: usize = 64;

/// Logical exclusive-or: `(a AND NOT b) OR (NOT a AND b)`.
///
/// Attempts and todos reference exactly one climb; storage checks the same
/// expression over the nullness of their two reference columns.
///
/// # Examples
/// ```
/// use tickle::domain::xor;
///
/// assert!(xor(true, false));
/// assert!(!xor(true, true));
/// assert!(!xor(false, false));
/// ```
#[must_use]
pub const fn xor(a: bool, b: bool) -> bool {
    (a && !b) || (!a && b)
}

/// Validation errors for climb names, links and pitch sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClimbValidationError {
    /// Name is empty or only whitespace.
    EmptyName,
    /// Name exceeds `max` characters.
    NameTooLong { max: usize },
    /// Link is not an absolute http(s) URL.
    InvalidMountainProjectUrl,
    /// Pitch position is above `max`.
    PitchOrderOutOfRange { max: u16 },
    /// Two pitches share position `order`.
    DuplicatePitchOrder { order: u16 },
}

impl fmt::Display for ClimbValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::InvalidMountainProjectUrl => {
                write!(f, "mountainproject must be an absolute http(s) URL")
            }
            Self::PitchOrderOutOfRange { max } => {
                write!(f, "pitch order must be between 0 and {max}")
            }
            Self::DuplicatePitchOrder { order } => {
                write!(f, "more than one pitch uses order {order}")
            }
        }
    }
}

impl std::error::Error for ClimbValidationError {}

/// Name of a boulder or route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimbName(String);

impl ClimbName {
    /// Validate a climb name, rejecting blank or overlong values.
    pub fn new(value: impl Into<String>) -> Result<Self, ClimbValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ClimbValidationError::EmptyName);
        }
        if value.chars().count() > CLIMB_NAME_MAX {
            return Err(ClimbValidationError::NameTooLong {
                max: CLIMB_NAME_MAX,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for ClimbName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ClimbName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Link to the climb's Mountain Project page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountainProjectUrl(Url);

impl MountainProjectUrl {
    /// Parse an absolute `http` or `https` URL.
    pub fn parse(value: &str) -> Result<Self, ClimbValidationError> {
        let url = Url::parse(value).map_err(|_| ClimbValidationError::InvalidMountainProjectUrl)?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(Self(url)),
            _ => Err(ClimbValidationError::InvalidMountainProjectUrl),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MountainProjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a pair of reference columns does not name exactly one climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbRefError {
    /// Both a boulder and a route are referenced.
    Both,
    /// Neither column is set.
    Neither,
}

impl fmt::Display for ClimbRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "exactly one of boulder or route must be set, not both"),
            Self::Neither => write!(f, "exactly one of boulder or route must be set"),
        }
    }
}

impl std::error::Error for ClimbRefError {}

/// The climb an attempt or todo is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimbRef {
    Boulder(Uuid),
    Route(Uuid),
}

impl ClimbRef {
    /// Build a reference from a nullable boulder/route column pair.
    ///
    /// # Examples
    /// ```
    /// use tickle::domain::{ClimbRef, ClimbRefError};
    /// use uuid::Uuid;
    ///
    /// let id = Uuid::new_v4();
    /// assert_eq!(ClimbRef::from_columns(Some(id), None), Ok(ClimbRef::Boulder(id)));
    /// assert_eq!(ClimbRef::from_columns(None, None), Err(ClimbRefError::Neither));
    /// ```
    pub fn from_columns(
        boulder_id: Option<Uuid>,
        route_id: Option<Uuid>,
    ) -> Result<Self, ClimbRefError> {
        if !xor(boulder_id.is_none(), route_id.is_none()) {
            return Err(if boulder_id.is_some() {
                ClimbRefError::Both
            } else {
                ClimbRefError::Neither
            });
        }
        match (boulder_id, route_id) {
            (Some(id), _) => Ok(Self::Boulder(id)),
            (None, Some(id)) => Ok(Self::Route(id)),
            (None, None) => Err(ClimbRefError::Neither),
        }
    }

    /// Boulder id, when this refers to a boulder.
    pub fn boulder_id(&self) -> Option<Uuid> {
        match self {
            Self::Boulder(id) => Some(*id),
            Self::Route(_) => None,
        }
    }

    /// Route id, when this refers to a route.
    pub fn route_id(&self) -> Option<Uuid> {
        match self {
            Self::Boulder(_) => None,
            Self::Route(id) => Some(*id),
        }
    }
}
