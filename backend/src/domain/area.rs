//! Climbing areas arranged as an adjacency-list hierarchy.

use std::fmt;

use uuid::Uuid;

use super::{Boulder, Route};

/// Longest accepted area name.
pub const AREA_NAME_MAX: usize = 64;

/// Validation errors for areas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaValidationError {
    /// Name is empty or only whitespace.
    EmptyName,
    /// Name exceeds `max` characters.
    NameTooLong { max: usize },
    /// The area names itself as parent.
    SelfParent,
}

impl fmt::Display for AreaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "area name must not be empty"),
            Self::NameTooLong { max } => write!(f, "area name must be at most {max} characters"),
            Self::SelfParent => write!(f, "an area cannot be its own parent"),
        }
    }
}

impl std::error::Error for AreaValidationError {}

/// Name of an area, crag or sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaName(String);

impl AreaName {
    /// Validate an area name, rejecting blank or overlong values.
    pub fn new(value: impl Into<String>) -> Result<Self, AreaValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AreaValidationError::EmptyName);
        }
        if value.chars().count() > AREA_NAME_MAX {
            return Err(AreaValidationError::NameTooLong { max: AREA_NAME_MAX });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for AreaName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AreaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// An area; top-level areas have no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    id: Uuid,
    name: AreaName,
    parent_id: Option<Uuid>,
}

impl Area {
    /// Build an area, rejecting one that is its own parent.
    pub fn new(
        id: Uuid,
        name: AreaName,
        parent_id: Option<Uuid>,
    ) -> Result<Self, AreaValidationError> {
        if parent_id == Some(id) {
            return Err(AreaValidationError::SelfParent);
        }
        Ok(Self {
            id,
            name,
            parent_id,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &AreaName {
        &self.name
    }

    /// Enclosing area; `None` for a top-level area.
    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    /// Whether the area has no parent.
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An area together with everything placed directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaDetail {
    pub area: Area,
    pub children: Vec<Area>,
    pub boulders: Vec<Boulder>,
    pub routes: Vec<Route>,
}
