/// HTTP surface of the habit tracker
/// 
/// Builds the axum router, maps storage outcomes to redirects and JSON
/// error payloads, and serves static assets behind request tracing,
/// request ids and panic recovery.

pub mod error;
pub mod form;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use server::{build_router, AppState};
