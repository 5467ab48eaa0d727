//! Logged attempts on boulders and routes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClimbRef, UserId};

/// Outcome of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptResult {
    /// Topped the climb.
    Send,
    /// Came off before the top.
    Fall,
}

/// Error returned when parsing an attempt result from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAttemptResultError;

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send => f.write_str("send"),
            Self::Fall => f.write_str("fall"),
        }
    }
}

impl fmt::Display for ParseAttemptResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid attempt result")
    }
}

impl std::error::Error for ParseAttemptResultError {}

impl FromStr for AttemptResult {
    type Err = ParseAttemptResultError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "send" => Ok(Self::Send),
            "fall" => Ok(Self::Fall),
            _ => Err(ParseAttemptResultError),
        }
    }
}

/// Protection used on an attempt, or planned for a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protection {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "bolts")]
    Bolts,
    #[serde(rename = "gear")]
    Gear,
    #[serde(rename = "pad")]
    Pad,
    #[serde(rename = "tr")]
    TopRope,
}

/// Error returned when parsing protection from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseProtectionError;

impl Protection {
    /// Stable wire and storage code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bolts => "bolts",
            Self::Gear => "gear",
            Self::Pad => "pad",
            Self::TopRope => "tr",
        }
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseProtectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid protection")
    }
}

impl std::error::Error for ParseProtectionError {}

impl FromStr for Protection {
    type Err = ParseProtectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "bolts" => Ok(Self::Bolts),
            "gear" => Ok(Self::Gear),
            "pad" => Ok(Self::Pad),
            "tr" => Ok(Self::TopRope),
            _ => Err(ParseProtectionError),
        }
    }
}

/// Components of an [`Attempt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptDraft {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub notes: String,
    pub climb: ClimbRef,
    pub result: AttemptResult,
    pub prior_knowledge: bool,
    pub protection_used: Protection,
}

/// One go at a climb on a given day.
///
/// The climb is a [`ClimbRef`], so an attempt always names exactly one
/// boulder or route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    id: Uuid,
    user_id: UserId,
    date: NaiveDate,
    notes: String,
    climb: ClimbRef,
    result: AttemptResult,
    prior_knowledge: bool,
    protection_used: Protection,
}

impl Attempt {
    /// Assemble an attempt from already validated parts.
    pub fn new(draft: AttemptDraft) -> Self {
        let AttemptDraft {
            id,
            user_id,
            date,
            notes,
            climb,
            result,
            prior_knowledge,
            protection_used,
        } = draft;
        Self {
            id,
            user_id,
            date,
            notes,
            climb,
            result,
            prior_knowledge,
            protection_used,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Climber who made the attempt.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Day the attempt was made.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// The boulder or route attempted.
    pub fn climb(&self) -> ClimbRef {
        self.climb
    }

    pub fn result(&self) -> AttemptResult {
        self.result
    }

    /// Whether the climber had beta before trying.
    pub fn prior_knowledge(&self) -> bool {
        self.prior_knowledge
    }

    /// Protection the climber relied on.
    pub fn protection_used(&self) -> Protection {
        self.protection_used
    }
}
