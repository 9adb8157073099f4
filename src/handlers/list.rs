/// Handler for listing all habits

use crate::domain::Habit;
use crate::storage::{StorageError, HabitStorage};

/// Fetch every habit, read fresh from storage on each call
pub fn list_habits<S: HabitStorage>(storage: &S) -> Result<Vec<Habit>, StorageError> {
    let habits = storage.list_habits()?;
    tracing::debug!("Loaded {} habits", habits.len());
    Ok(habits)
}
