//! Climbs a user intends to try.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClimbName, ClimbRef, Difficulty, Protection, UserId};

/// How the user means to climb it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStyle {
    Onsight,
    Flash,
    Project,
    Other,
}

/// Error returned when parsing a todo style from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTodoStyleError;

impl TodoStyle {
    /// Stored code for the style.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Onsight => "onsight",
            Self::Flash => "flash",
            Self::Project => "project",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TodoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ParseTodoStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid todo style")
    }
}

impl std::error::Error for ParseTodoStyleError {}

impl FromStr for TodoStyle {
    type Err = ParseTodoStyleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "onsight" => Ok(Self::Onsight),
            "flash" => Ok(Self::Flash),
            "project" => Ok(Self::Project),
            "other" => Ok(Self::Other),
            _ => Err(ParseTodoStyleError),
        }
    }
}

/// Components of a [`Todo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub id: Uuid,
    pub user_id: UserId,
    pub notes: String,
    pub protection: Protection,
    pub climb: ClimbRef,
    pub style: TodoStyle,
}

/// A climb on a user's to-do list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: Uuid,
    user_id: UserId,
    notes: String,
    protection: Protection,
    climb: ClimbRef,
    style: TodoStyle,
}

impl Todo {
    /// Assemble a todo from already validated parts.
    pub fn new(draft: TodoDraft) -> Self {
        let TodoDraft {
            id,
            user_id,
            notes,
            protection,
            climb,
            style,
        } = draft;
        Self {
            id,
            user_id,
            notes,
            protection,
            climb,
            style,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Climber the todo belongs to.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Protection the climber expects to use.
    pub fn protection(&self) -> Protection {
        self.protection
    }

    /// The boulder or route to try.
    pub fn climb(&self) -> ClimbRef {
        self.climb
    }

    pub fn style(&self) -> TodoStyle {
        self.style
    }
}

/// A todo joined with the name and grade of the climb it points at.
///
/// For a route the grade is the one derived from its hardest pitch.
///
/// # Examples
/// ```
/// use tickle::domain::{
///     ClimbName, ClimbRef, Difficulty, DifficultyName, Protection, Todo, TodoDraft, TodoEntry,
///     TodoStyle, UserId,
/// };
/// use uuid::Uuid;
///
/// let todo = Todo::new(TodoDraft {
///     id: Uuid::new_v4(),
///     user_id: UserId::random(),
///     notes: String::new(),
///     protection: Protection::Pad,
///     climb: ClimbRef::Boulder(Uuid::new_v4()),
///     style: TodoStyle::Project,
/// });
/// let v8 = Difficulty::new(Uuid::new_v4(), 8, DifficultyName::new("V8").unwrap()).unwrap();
/// let entry = TodoEntry::new(todo, ClimbName::new("Midnight Lightning").unwrap(), Some(v8));
/// assert_eq!(entry.to_string(), "project Midnight Lightning (V8)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    todo: Todo,
    climb_name: ClimbName,
    difficulty: Option<Difficulty>,
}

impl TodoEntry {
    /// Join a todo with its climb's name and grade.
    pub fn new(todo: Todo, climb_name: ClimbName, difficulty: Option<Difficulty>) -> Self {
        Self {
            todo,
            climb_name,
            difficulty,
        }
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn climb_name(&self) -> &ClimbName {
        &self.climb_name
    }

    /// Grade of the climb, `None` when it is unrated.
    pub fn difficulty(&self) -> Option<&Difficulty> {
        self.difficulty.as_ref()
    }
}

impl fmt::Display for TodoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.difficulty {
            Some(difficulty) => write!(f, "{} {} ({difficulty})", self.todo.style, self.climb_name),
            None => write!(f, "{} {} (unrated)", self.todo.style, self.climb_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TodoStyle::Onsight, "onsight")]
    #[case(TodoStyle::Flash, "flash")]
    #[case(TodoStyle::Project, "project")]
    #[case(TodoStyle::Other, "other")]
    fn style_codes(#[case] style: TodoStyle, #[case] raw: &str) {
        assert_eq!(style.to_string(), raw);
        assert_eq!(raw.parse::<TodoStyle>(), Ok(style));
    }

    fn route_todo(style: TodoStyle) -> Todo {
        Todo::new(TodoDraft {
            id: Uuid::new_v4(),
            user_id: UserId::random(),
            notes: "bring doubles".to_owned(),
            protection: Protection::Gear,
            climb: ClimbRef::Route(Uuid::new_v4()),
            style,
        })
    }

    #[rstest]
    fn entry_display_uses_route_name_and_grade() {
        let grade = Difficulty::new(
            Uuid::new_v4(),
            9,
            crate::domain::DifficultyName::new("5.11c").expect("valid grade"),
        )
        .expect("valid difficulty");
        let entry = TodoEntry::new(
            route_todo(TodoStyle::Onsight),
            ClimbName::new("Outer Limits").expect("valid name"),
            Some(grade),
        );

        assert_eq!(entry.to_string(), "onsight Outer Limits (5.11c)");
        assert_eq!(entry.todo().notes(), "bring doubles");
    }

    #[rstest]
    fn entry_without_grade_is_unrated() {
        let entry = TodoEntry::new(
            route_todo(TodoStyle::Flash),
            ClimbName::new("Outer Limits").expect("valid name"),
            None,
        );

        assert_eq!(entry.to_string(), "flash Outer Limits (unrated)");
        assert!(entry.difficulty().is_none());
    }
}
