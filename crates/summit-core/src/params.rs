//! Parameter structures for tracker operations
//!
//! These structures are shared between the tracker and the interfaces that
//! drive it. They carry exactly what an operation needs and nothing tied to a
//! particular transport: the HTTP layer deserializes its own request bodies and
//! converts them into these types.
//!
//! Identifiers coming from the outside world are represented by [`PathId`],
//! which may hold *no id* when the caller supplied something that does not
//! start with a number. Such an id never matches a stored record, so lookups
//! with it report "not found" instead of a parse failure.

use std::fmt;

/// An identifier supplied by a caller, parsed with leading-integer semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PathId(Option<u64>);

impl PathId {
    /// Parses the leading decimal integer of `raw`.
    ///
    /// Leading whitespace and a single `+` are skipped, then the longest run
    /// of ASCII digits is taken and anything after it is ignored. Input with
    /// no leading digits, a `-` sign, or a value that does not fit in a `u64`
    /// yields an id that matches nothing.
    ///
    /// ```rust
    /// use summit_core::params::PathId;
    ///
    /// assert_eq!(PathId::parse("42").get(), Some(42));
    /// assert_eq!(PathId::parse(" 12abc").get(), Some(12));
    /// assert_eq!(PathId::parse("abc").get(), None);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());

        Self(unsigned[..digits_end].parse::<u64>().ok())
    }

    /// An id that matches no record.
    pub const fn none() -> Self {
        Self(None)
    }

    /// The parsed value, if any.
    pub const fn get(self) -> Option<u64> {
        self.0
    }

    /// Whether this id addresses the record with id `id`.
    pub fn matches(self, id: u64) -> bool {
        self.0 == Some(id)
    }
}

impl From<u64> for PathId {
    fn from(id: u64) -> Self {
        Self(Some(id))
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("<invalid>"),
        }
    }
}

/// Generic parameters for operations requiring just a goal ID.
///
/// Used by delete_goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Id {
    /// The ID of the goal to operate on
    pub id: PathId,
}

/// Parameters for creating a new goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateGoal {
    /// Text of the goal; required and non-empty
    pub goal: Option<String>,
    /// Texts of the sub-goals to create alongside the goal, in order
    pub sub_goals: Option<Vec<String>>,
}

/// Parameters for replacing the text of a goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeGoal {
    /// The ID of the goal to change
    pub id: PathId,
    /// New text; `None` clears the stored text
    pub goal: Option<String>,
}

/// Parameters addressing one sub-goal of one goal.
///
/// Used by delete_sub_goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubGoalRef {
    /// The ID of the parent goal
    pub goal_id: PathId,
    /// The ID of the sub-goal within the parent
    pub sub_goal_id: PathId,
}

/// Parameters for replacing the text of a sub-goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSubGoal {
    /// The ID of the parent goal
    pub goal_id: PathId,
    /// The ID of the sub-goal within the parent
    pub sub_goal_id: PathId,
    /// New text; `None` clears the stored text
    pub goal: Option<String>,
}

/// Parameters for appending a sub-goal to an existing goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddSubGoal {
    /// The ID of the parent goal
    pub goal_id: PathId,
    /// Text of the sub-goal; required and non-empty
    pub goal: Option<String>,
}
