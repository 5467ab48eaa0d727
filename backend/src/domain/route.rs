//! Roped routes and their pitches.
//!
//! A route's grade is never stored. It is the grade of its hardest pitch,
//! recomputed from the current pitch set on every read; a route without
//! pitches is unrated.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClimbName, ClimbValidationError, DIFFICULTY_ORDER_MAX, Difficulty, MountainProjectUrl};

/// How a route is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtectionStyle {
    /// Fixed bolts.
    #[serde(rename = "sport")]
    Sport,
    /// Rope anchored from above.
    #[serde(rename = "toprope")]
    TopRope,
    /// Climber-placed gear.
    #[serde(rename = "trad")]
    Trad,
}

/// Error returned when parsing a protection style from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseProtectionStyleError;

impl fmt::Display for ProtectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sport => f.write_str("sport"),
            Self::TopRope => f.write_str("toprope"),
            Self::Trad => f.write_str("trad"),
        }
    }
}

impl fmt::Display for ParseProtectionStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid protection style")
    }
}

impl std::error::Error for ParseProtectionStyleError {}

impl FromStr for ProtectionStyle {
    type Err = ParseProtectionStyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sport" => Ok(Self::Sport),
            "toprope" => Ok(Self::TopRope),
            "trad" => Ok(Self::Trad),
            _ => Err(ParseProtectionStyleError),
        }
    }
}

/// One rope-length of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pitch {
    id: Uuid,
    order: u16,
    difficulty: Difficulty,
}

impl Pitch {
    /// Build a pitch, rejecting positions above [`DIFFICULTY_ORDER_MAX`].
    pub fn new(id: Uuid, order: u16, difficulty: Difficulty) -> Result<Self, ClimbValidationError> {
        check_pitch_order(order)?;
        Ok(Self {
            id,
            order,
            difficulty,
        })
    }

    /// Stable identifier of the pitch.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Position within the route, ascending from the ground.
    pub fn order(&self) -> u16 {
        self.order
    }

    /// Grade of this pitch alone.
    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{} ({})", self.order, self.difficulty)
    }
}

fn check_pitch_order(order: u16) -> Result<(), ClimbValidationError> {
    if order > DIFFICULTY_ORDER_MAX {
        return Err(ClimbValidationError::PitchOrderOutOfRange {
            max: DIFFICULTY_ORDER_MAX,
        });
    }
    Ok(())
}

fn check_unique_orders(orders: impl IntoIterator<Item = u16>) -> Result<(), ClimbValidationError> {
    let mut seen = HashSet::new();
    for order in orders {
        if !seen.insert(order) {
            return Err(ClimbValidationError::DuplicatePitchOrder { order });
        }
    }
    Ok(())
}

/// Validated components of a [`Route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDraft {
    pub id: Uuid,
    pub name: ClimbName,
    pub area_id: Option<Uuid>,
    pub protection_style: ProtectionStyle,
    pub mountainproject: Option<MountainProjectUrl>,
    pub pitches: Vec<Pitch>,
}

/// Route as read back from storage, pitches in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: Uuid,
    name: ClimbName,
    area_id: Option<Uuid>,
    protection_style: ProtectionStyle,
    mountainproject: Option<MountainProjectUrl>,
    pitches: Vec<Pitch>,
}

impl Route {
    /// Build a route, sorting pitches and rejecting repeated positions.
    pub fn new(draft: RouteDraft) -> Result<Self, ClimbValidationError> {
        let RouteDraft {
            id,
            name,
            area_id,
            protection_style,
            mountainproject,
            mut pitches,
        } = draft;
        check_unique_orders(pitches.iter().map(Pitch::order))?;
        pitches.sort_by_key(Pitch::order);
        Ok(Self {
            id,
            name,
            area_id,
            protection_style,
            mountainproject,
            pitches,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &ClimbName {
        &self.name
    }

    /// Area the route sits in, if any.
    pub fn area_id(&self) -> Option<Uuid> {
        self.area_id
    }

    pub fn protection_style(&self) -> ProtectionStyle {
        self.protection_style
    }

    pub fn mountainproject(&self) -> Option<&MountainProjectUrl> {
        self.mountainproject.as_ref()
    }

    /// Pitches in ascending order.
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Grade of the hardest pitch, or `None` when the route has no pitches.
    ///
    /// Ties resolve to the lowest pitch.
    ///
    /// # Examples
    /// ```
    /// use tickle::domain::{
    ///     ClimbName, Difficulty, DifficultyName, Pitch, ProtectionStyle, Route, RouteDraft,
    /// };
    /// use uuid::Uuid;
    ///
    /// let grade = |order, name: &str| {
    ///     Difficulty::new(Uuid::new_v4(), order, DifficultyName::new(name).unwrap()).unwrap()
    /// };
    /// let pitches = [(1, grade(2, "5.8")), (2, grade(5, "5.11a")), (3, grade(3, "5.9"))]
    ///     .into_iter()
    ///     .map(|(order, difficulty)| Pitch::new(Uuid::new_v4(), order, difficulty).unwrap())
    ///     .collect();
    /// let route = Route::new(RouteDraft {
    ///     id: Uuid::new_v4(),
    ///     name: ClimbName::new("Royal Arches").unwrap(),
    ///     area_id: None,
    ///     protection_style: ProtectionStyle::Trad,
    ///     mountainproject: None,
    ///     pitches,
    /// })
    /// .unwrap();
    /// assert_eq!(route.difficulty().map(Difficulty::order), Some(5));
    /// ```
    pub fn difficulty(&self) -> Option<&Difficulty> {
        hardest_pitch(&self.pitches)
    }
}

/// Grade of the hardest of `pitches`, preferring the lowest pitch on ties.
///
/// `pitches` must be in ascending pitch order.
pub fn hardest_pitch(pitches: &[Pitch]) -> Option<&Difficulty> {
    pitches
        .iter()
        .rev()
        .max_by_key(|pitch| pitch.difficulty().order())
        .map(Pitch::difficulty)
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.difficulty() {
            Some(difficulty) => write!(f, "{} ({difficulty})", self.name),
            None => write!(f, "{} (unrated)", self.name),
        }
    }
}

/// Write model for one pitch; the grade is referenced by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPitch {
    pub id: Uuid,
    pub order: u16,
    pub difficulty_id: Uuid,
}

/// Write model for a route and its pitches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoute {
    id: Uuid,
    name: ClimbName,
    area_id: Option<Uuid>,
    protection_style: ProtectionStyle,
    mountainproject: Option<MountainProjectUrl>,
    pitches: Vec<NewPitch>,
}

/// Unvalidated pitch list and metadata for [`NewRoute::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRouteDraft {
    pub id: Uuid,
    pub name: ClimbName,
    pub area_id: Option<Uuid>,
    pub protection_style: ProtectionStyle,
    pub mountainproject: Option<MountainProjectUrl>,
    pub pitches: Vec<NewPitch>,
}

impl NewRoute {
    /// Validate a route for creation, rejecting repeated pitch positions.
    pub fn new(draft: NewRouteDraft) -> Result<Self, ClimbValidationError> {
        let NewRouteDraft {
            id,
            name,
            area_id,
            protection_style,
            mountainproject,
            mut pitches,
        } = draft;
        for pitch in &pitches {
            check_pitch_order(pitch.order)?;
        }
        check_unique_orders(pitches.iter().map(|pitch| pitch.order))?;
        pitches.sort_by_key(|pitch| pitch.order);
        Ok(Self {
            id,
            name,
            area_id,
            protection_style,
            mountainproject,
            pitches,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &ClimbName {
        &self.name
    }

    pub fn area_id(&self) -> Option<Uuid> {
        self.area_id
    }

    pub fn protection_style(&self) -> ProtectionStyle {
        self.protection_style
    }

    pub fn mountainproject(&self) -> Option<&MountainProjectUrl> {
        self.mountainproject.as_ref()
    }

    /// Pitches as supplied, each referencing its grade by id.
    pub fn pitches(&self) -> &[NewPitch] {
        &self.pitches
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
