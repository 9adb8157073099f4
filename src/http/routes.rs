/// Axum handlers for each route

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::domain::{progress, HabitId};
use crate::handlers;
use crate::http::form::HabitForm;
use crate::http::{AppError, AppState};
use crate::storage::{HabitStorage, StorageError};
use crate::view;

/// 302 back to the habit list
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// GET /
pub async fn show_habits<S: HabitStorage + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Html<String>, AppError> {
    let habits = handlers::list_habits(state.storage.as_ref()).map_err(AppError::LoadFailed)?;
    Ok(Html(view::render_index(&habits, progress)))
}

/// POST /add
pub async fn add_habit<S: HabitStorage + 'static>(
    State(state): State<AppState<S>>,
    HabitForm(params): HabitForm,
) -> Response {
    if let Err(e) = handlers::create_habit(state.storage.as_ref(), params) {
        tracing::error!(error = %e, "Failed to create habit");
    }
    redirect_home()
}

/// GET /mark_done/{id}
pub async fn mark_habit_done<S: HabitStorage + 'static>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let habit_id: HabitId = raw_id.parse().map_err(|_| AppError::HabitNotFound)?;

    match handlers::mark_habit_done(state.storage.as_ref(), habit_id) {
        Ok(_) => Ok(redirect_home()),
        Err(StorageError::HabitNotFound { .. }) => Err(AppError::HabitNotFound),
        Err(e) => Err(AppError::UpdateFailed(e)),
    }
}

/// POST /delete_all
pub async fn delete_all_habits<S: HabitStorage + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Response, AppError> {
    handlers::delete_all_habits(state.storage.as_ref()).map_err(AppError::DeleteFailed)?;
    Ok(redirect_home())
}
