/// Habit entity and related functionality
/// 
/// A habit is a named counter. The storage layer assigns its id and the
/// streak only ever goes up until every habit is cleared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// Unique identifier for a habit
/// 
/// Wraps the SQLite row id so a streak count can't be passed where an
/// id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Raw integer value as stored in the database
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HabitId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(HabitId)
            .map_err(|_| DomainError::InvalidHabitId(s.to_string()))
    }
}

/// A habit the user is building a streak for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Identifier assigned by storage on creation
    pub id: HabitId,
    /// Display name (e.g., "Read", "Morning Run")
    pub name: String,
    /// Number of times the habit was marked done, never negative
    pub streak: i64,
}

impl Habit {
    /// Create a habit from existing data (used when loading from database)
    pub fn from_existing(id: HabitId, name: String, streak: i64) -> Self {
        Self { id, name, streak }
    }

    /// Validate a habit name before it is written
    ///
    /// Only presence is checked; whitespace and length are left as typed.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }
        Ok(())
    }
}
