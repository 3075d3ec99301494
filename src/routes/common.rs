//! Operational routes: liveness, readiness of the customer table, version.
//! Not behind the token gate.

use crate::state::AppState;
use crate::store::{readiness, Readiness, CUSTOMER_TABLE};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    table: &'static str,
}

fn ready_response(r: Readiness) -> (StatusCode, ReadyBody) {
    let (code, status, database, table) = match r {
        Readiness::Ready => (StatusCode::OK, "ok", "ok", "ok"),
        Readiness::TableMissing => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "ok", "missing"),
        Readiness::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable", "unknown"),
    };
    (code, ReadyBody { status, database, table })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// 200 only when the database answers and the `customer` table exists.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let (code, body) = ready_response(readiness(&state.pool).await);
    (code, Json(body))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "resource": CUSTOMER_TABLE
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
