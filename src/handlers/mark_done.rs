/// Handler for marking a habit done

use crate::domain::{Habit, HabitId};
use crate::storage::{StorageError, HabitStorage};

/// Increment the streak of an existing habit by one
///
/// Returns `StorageError::HabitNotFound` without touching storage when
/// the id is unknown.
pub fn mark_habit_done<S: HabitStorage>(
    storage: &S,
    habit_id: HabitId,
) -> Result<Habit, StorageError> {
    let habit = storage.increment_streak(habit_id)?;
    tracing::info!(habit_id = %habit.id, streak = habit.streak, "Habit marked done");
    Ok(habit)
}
