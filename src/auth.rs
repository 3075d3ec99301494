//! Shared-secret gate run before every customer route.

use crate::error::AppError;
use crate::extractors::AuthorizationHeader;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Rejects with 401 unless `Authorization` equals the configured token exactly.
/// Rejected requests never reach a handler.
pub async fn require_token(
    State(state): State<AppState>,
    AuthorizationHeader(header): AuthorizationHeader,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match header.as_deref() {
        Some(token) if token == &*state.auth_token => Ok(next.run(req).await),
        _ => {
            tracing::debug!(method = %req.method(), uri = %req.uri(), "missing or wrong token");
            Err(AppError::Unauthorized)
        }
    }
}
