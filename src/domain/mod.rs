/// Domain module containing the habit entity and progress calculation
/// 
/// This module defines the Habit record, its identifier type, and the
/// pure progress function that the page uses to draw progress bars.

pub mod habit;
pub mod progress;

// Re-export public types for easy access
pub use habit::*;
pub use progress::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid habit id: {0}")]
    InvalidHabitId(String),
}
