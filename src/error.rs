//! Request errors and their JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required query parameter was absent or empty.
    #[error("{0} is required")]
    MissingParameter(&'static str),
    /// The query string could not be decoded.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::MissingParameter(_) | AppError::InvalidQuery(_) => self.to_string(),
            AppError::Database(err) => {
                tracing::error!(error = %err, "query failed");
                "internal server error".to_string()
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
