//! Customer routes, all behind the shared-secret gate.

use crate::auth::require_token;
use crate::error::AppError;
use crate::handlers::customer::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{http::Uri, middleware, routing::get, Router};

async fn unknown_route(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}

/// The fallback sits under the gate too, so unknown paths without a token are 401.
pub fn customer_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(list).post(create))
        .route("/customers/:id", get(read).put(update).delete(delete_handler))
        .fallback(unknown_route)
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}
