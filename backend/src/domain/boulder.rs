//! Boulder problems.

use std::fmt;

use uuid::Uuid;

use super::{ClimbName, Difficulty, MountainProjectUrl};

/// Boulder as read back from storage, with its grade resolved.
///
/// # Examples
/// ```
/// use tickle::domain::{Boulder, BoulderDraft, ClimbName};
/// use uuid::Uuid;
///
/// let boulder = Boulder::new(BoulderDraft {
///     id: Uuid::new_v4(),
///     name: ClimbName::new("Midnight Lightning").unwrap(),
///     area_id: None,
///     difficulty: None,
///     mountainproject: None,
/// });
/// assert_eq!(boulder.to_string(), "Midnight Lightning (unrated)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boulder {
    id: Uuid,
    name: ClimbName,
    area_id: Option<Uuid>,
    difficulty: Option<Difficulty>,
    mountainproject: Option<MountainProjectUrl>,
}

/// Validated components of a [`Boulder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoulderDraft {
    pub id: Uuid,
    pub name: ClimbName,
    pub area_id: Option<Uuid>,
    pub difficulty: Option<Difficulty>,
    pub mountainproject: Option<MountainProjectUrl>,
}

impl Boulder {
    /// Assemble a boulder from already decoded parts.
    pub fn new(draft: BoulderDraft) -> Self {
        let BoulderDraft {
            id,
            name,
            area_id,
            difficulty,
            mountainproject,
        } = draft;
        Self {
            id,
            name,
            area_id,
            difficulty,
            mountainproject,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &ClimbName {
        &self.name
    }

    /// Area the boulder sits in, if any.
    pub fn area_id(&self) -> Option<Uuid> {
        self.area_id
    }

    /// Grade, or `None` when the boulder is unrated.
    pub fn difficulty(&self) -> Option<&Difficulty> {
        self.difficulty.as_ref()
    }

    pub fn mountainproject(&self) -> Option<&MountainProjectUrl> {
        self.mountainproject.as_ref()
    }
}

impl fmt::Display for Boulder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.difficulty {
            Some(difficulty) => write!(f, "{} ({difficulty})", self.name),
            None => write!(f, "{} (unrated)", self.name),
        }
    }
}

/// Write model for a boulder; the grade is referenced by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoulder {
    pub id: Uuid,
    pub name: ClimbName,
    pub area_id: Option<Uuid>,
    pub difficulty_id: Option<Uuid>,
    pub mountainproject: Option<MountainProjectUrl>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DifficultyName;
    use rstest::rstest;

    #[rstest]
    fn display_includes_grade() {
        let grade = Difficulty::new(
            Uuid::new_v4(),
            8,
            DifficultyName::new("V8").expect("valid name"),
        )
        .expect("valid grade");
        let boulder = Boulder::new(BoulderDraft {
            id: Uuid::new_v4(),
            name: ClimbName::new("Midnight Lightning").expect("valid name"),
            area_id: None,
            difficulty: Some(grade),
            mountainproject: None,
        });

        assert_eq!(boulder.to_string(), "Midnight Lightning (V8)");
        assert_eq!(
            boulder.difficulty().map(Difficulty::order),
            Some(8)
        );
    }
}
