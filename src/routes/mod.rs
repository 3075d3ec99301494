//! Route assembly.

mod common;
mod customer;

pub use common::common_routes;
pub use customer::customer_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};

/// Full application router: operational routes plus the gated customer API.
/// The body limit is enforced when a handler reads the body, after the gate.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(customer_routes(state))
        .layer(DefaultBodyLimit::max(body_limit))
}
