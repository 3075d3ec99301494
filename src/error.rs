//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message of the 401 body, `{"error": "Unauthorized."}`.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized.")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            // Driver errors are reported as 400, not 500.
            AppError::Db(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// 401 body.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Body of every other failure: `{"status": "<message>"}`.
#[derive(Serialize)]
pub struct StatusBody {
    pub status: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Db(e) => tracing::warn!(error = %e, "storage error"),
            other => tracing::debug!(error = %other, status = %status, "request rejected"),
        }
        match self {
            AppError::Unauthorized => (
                status,
                Json(ErrorBody {
                    error: UNAUTHORIZED_MESSAGE,
                }),
            )
                .into_response(),
            other => (
                status,
                Json(StatusBody {
                    status: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
