/// Public library interface for the Habit Tracker web server
/// 
/// This module exports the server implementation and public types
/// that can be used by the binary or by tests.

use thiserror::Error;

// Internal modules
mod config;
mod domain;
mod handlers;
mod http;
mod storage;
mod view;

// Re-export public modules and types
pub use config::{ServerConfig, DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_PATH, DEFAULT_STATIC_DIR};
pub use domain::*;
pub use handlers::{CreateHabitOutcome, CreateHabitParams};
pub use http::{build_router, AppError, AppState};
pub use storage::{SqliteStorage, StorageError, HabitStorage};
pub use view::render_index;

/// Errors that can stop the server from starting or running
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),
    
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Habit tracker web server
/// 
/// Owns the storage handle and hands it to every request through the
/// router state.
pub struct HabitTrackerServer {
    config: ServerConfig,
    state: AppState,
}

impl HabitTrackerServer {
    /// Create a new server from the given configuration
    /// 
    /// This creates the database directory if needed and initializes the
    /// schema. Any failure here is fatal to startup.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        tracing::info!("Initializing Habit Tracker server with database: {:?}", config.database_path);

        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let storage = SqliteStorage::new(&config.database_path)?;

        Ok(Self {
            config,
            state: AppState::new(storage),
        })
    }
    
    /// Build the HTTP router for this server
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), &self.config.static_dir)
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(self) -> Result<(), ServerError> {
        let habits = self.state.storage.list_habits()?;
        tracing::info!("Server started successfully, found {} existing habits", habits.len());

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address).await?;
        http::server::serve(listener, self.router()).await?;
        
        Ok(())
    }
    
    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.state.storage
    }
}
