/// HTTP-facing errors and their JSON payloads

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors a request can end with
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Habit not found")]
    HabitNotFound,

    #[error("Failed to delete habits")]
    DeleteFailed(#[source] StorageError),

    #[error("Failed to load habits")]
    LoadFailed(#[source] StorageError),

    #[error("Failed to update habit")]
    UpdateFailed(#[source] StorageError),
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::HabitNotFound => StatusCode::NOT_FOUND,
            AppError::DeleteFailed(_)
            | AppError::LoadFailed(_)
            | AppError::UpdateFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::HabitNotFound => tracing::warn!("{}", self),
            AppError::DeleteFailed(e) | AppError::LoadFailed(e) | AppError::UpdateFailed(e) => {
                tracing::error!(error = %e, "{}", self)
            }
        }

        let body = ErrorBody { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
