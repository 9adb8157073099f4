/// Runtime configuration for the habit tracker server
/// 
/// The binary fills this in from command line flags; tests build it
/// directly.

use std::path::PathBuf;

/// Default SQLite file, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "db/habits.db";

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default directory served under `/static`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Where the server keeps its data and what it listens on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the SQLite database file
    pub database_path: PathBuf,
    /// Socket address to listen on
    pub bind_address: String,
    /// Directory of static assets
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
