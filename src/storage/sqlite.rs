/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habits. It handles all SQL queries and row conversion.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use rusqlite::{Connection, Row, params};

use crate::domain::{Habit, HabitId};
use crate::storage::{StorageError, HabitStorage, migrations};

const HABIT_COLUMNS: &str = "id, name, streak";

/// SQLite-based storage implementation
///
/// One connection is shared by every request. The mutex serializes access
/// and SQLite itself serializes writers.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let storage = Self::from_connection(conn)?;
        tracing::info!("SQLite storage initialized at: {:?}", db_path);
        Ok(storage)
    }

    /// Create a storage instance backed by a private in-memory database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        migrations::initialize_database(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn row_to_habit(row: &Row<'_>) -> rusqlite::Result<Habit> {
        Ok(Habit::from_existing(
            HabitId(row.get(0)?),
            row.get(1)?, // name
            row.get(2)?, // streak
        ))
    }
}

fn not_found_or(err: rusqlite::Error, habit_id: HabitId) -> StorageError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => StorageError::HabitNotFound { habit_id },
        e => StorageError::Query(e),
    }
}

impl HabitStorage for SqliteStorage {
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM habits ORDER BY id ASC",
            HABIT_COLUMNS
        ))?;

        let habits = stmt
            .query_map([], Self::row_to_habit)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(habits)
    }

    fn create_habit(&self, name: &str) -> Result<Habit, StorageError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO habits (name, streak) VALUES (?1, 0)",
            params![name],
        )?;

        let habit = Habit::from_existing(HabitId(conn.last_insert_rowid()), name.to_string(), 0);
        tracing::debug!("Created habit: {} ({})", habit.name, habit.id);
        Ok(habit)
    }

    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("SELECT {} FROM habits WHERE id = ?1", HABIT_COLUMNS),
            params![habit_id.value()],
            Self::row_to_habit,
        )
        .map_err(|e| not_found_or(e, habit_id))
    }

    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let conn = self.lock()?;
        let rows_affected = conn.execute(
            "UPDATE habits SET name = ?2, streak = ?3 WHERE id = ?1",
            params![habit.id.value(), habit.name, habit.streak],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound { habit_id: habit.id });
        }

        tracing::debug!("Updated habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    fn increment_streak(&self, habit_id: HabitId) -> Result<Habit, StorageError> {
        let conn = self.lock()?;
        let habit = conn
            .query_row(
                &format!(
                    "UPDATE habits
                     SET streak = CASE WHEN streak < ?2 THEN streak + 1 ELSE streak END
                     WHERE id = ?1
                     RETURNING {}",
                    HABIT_COLUMNS
                ),
                params![habit_id.value(), i64::MAX],
                Self::row_to_habit,
            )
            .map_err(|e| not_found_or(e, habit_id))?;

        tracing::debug!("Incremented streak for habit {} to {}", habit.id, habit.streak);
        Ok(habit)
    }

    fn delete_all_habits(&self) -> Result<usize, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let removed = tx.execute("DELETE FROM habits", [])?;
        tx.execute("DELETE FROM sqlite_sequence WHERE name = 'habits'", [])?;
        tx.commit()?;

        tracing::debug!("Deleted {} habits and reset id sequence", removed);
        Ok(removed)
    }
}
