/// Storage layer for persisting habit data
/// 
/// This module handles all database operations using SQLite. It provides
/// a small interface for storing, updating and clearing habits.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use crate::domain::{Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),
    
    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),
    
    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: HabitId },
    
    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Database lock poisoned")]
    LockPoisoned,
}

/// Trait defining the storage interface for habits
/// 
/// Handlers and routes are written against this trait rather than against
/// SQLite directly, so tests can drive them with any backing store. One
/// instance is shared by all in-flight requests.
pub trait HabitStorage: Send + Sync {
    /// List every habit, ordered by id
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Insert a habit with a zero streak and return it with its new id
    fn create_habit(&self, name: &str) -> Result<Habit, StorageError>;
    
    /// Get a habit by ID
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError>;
    
    /// Persist the name and streak of an existing habit
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Add one to a habit's streak in a single statement
    fn increment_streak(&self, habit_id: HabitId) -> Result<Habit, StorageError>;
    
    /// Remove every habit and restart id numbering
    ///
    /// Returns the number of habits removed.
    fn delete_all_habits(&self) -> Result<usize, StorageError>;
}
