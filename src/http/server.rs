/// Router construction and the serving loop

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::http::routes;
use crate::storage::{HabitStorage, SqliteStorage};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state injected into handlers.
///
/// Every request shares the one storage handle behind the `Arc`.
pub struct AppState<S = SqliteStorage> {
    pub storage: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(storage: S) -> Self {
        Self { storage: Arc::new(storage) }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage) }
    }
}

/// Build the router with all routes, static assets and middleware.
pub fn build_router<S>(state: AppState<S>, static_dir: impl AsRef<Path>) -> Router
where
    S: HabitStorage + 'static,
{
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(routes::show_habits::<S>))
        .route("/add", post(routes::add_habit::<S>))
        .route("/delete_all", post(routes::delete_all_habits::<S>))
        .route("/mark_done/{id}", get(routes::mark_habit_done::<S>))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Serve `router` on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
