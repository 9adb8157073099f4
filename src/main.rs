/// Main entry point for the Habit Tracker web server
/// 
/// This file sets up logging, parses command line arguments, and starts
/// the HTTP server.

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use habit_tracker_web::{
    HabitTrackerServer, ServerConfig, DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_PATH, DEFAULT_STATIC_DIR,
};

/// Command line arguments for the Habit Tracker web server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    bind: String,

    /// Directory served under /static
    #[arg(long, default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,
    
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    
    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    
    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };
    
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("habit_tracker_web={0},tower_http={0}", log_level))
            }),
        )
        .with_writer(std::io::stderr)
        .init();
    
    info!("Starting Habit Tracker web server");

    let config = ServerConfig {
        database_path: args.database,
        bind_address: args.bind,
        static_dir: args.static_dir,
    };
    
    info!("Using database at: {}", config.database_path.display());
    
    let server = HabitTrackerServer::new(config).map_err(|e| {
        error!("Failed to start server: {}", e);
        e
    })?;
    
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e.into());
    }
    
    info!("Habit Tracker web server shutdown complete");
    Ok(())
}
