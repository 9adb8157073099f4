/// Handler for creating new habits

use serde::Deserialize;
use crate::domain::Habit;
use crate::storage::{StorageError, HabitStorage};

/// Form parameters for creating a new habit
///
/// A missing `name` field is treated the same as an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateHabitParams {
    #[serde(default)]
    pub name: String,
}

/// What happened to a create request
#[derive(Debug, PartialEq, Eq)]
pub enum CreateHabitOutcome {
    Created(Habit),
    /// The name was empty, nothing was written
    Skipped,
}

/// Create a new habit, silently skipping empty names
pub fn create_habit<S: HabitStorage>(
    storage: &S,
    params: CreateHabitParams,
) -> Result<CreateHabitOutcome, StorageError> {
    if let Err(e) = Habit::validate_name(&params.name) {
        tracing::debug!("Skipping habit creation: {}", e);
        return Ok(CreateHabitOutcome::Skipped);
    }

    let habit = storage.create_habit(&params.name)?;
    tracing::info!(habit_id = %habit.id, name = %habit.name, "Habit created");
    Ok(CreateHabitOutcome::Created(habit))
}
