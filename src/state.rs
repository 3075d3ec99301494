//! Shared application state for all routes.

use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Shared secret compared against the `Authorization` header.
    pub auth_token: Arc<str>,
}

impl AppState {
    pub fn new(pool: PgPool, auth_token: impl Into<Arc<str>>) -> Self {
        AppState {
            pool,
            auth_token: auth_token.into(),
        }
    }
}
