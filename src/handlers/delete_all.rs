/// Handler for clearing every habit

use crate::storage::{StorageError, HabitStorage};

/// Remove all habits and restart id numbering
pub fn delete_all_habits<S: HabitStorage>(storage: &S) -> Result<usize, StorageError> {
    let removed = storage.delete_all_habits()?;
    tracing::info!(removed, "All habits deleted");
    Ok(removed)
}
