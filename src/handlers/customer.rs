//! Customer handlers: create, read, list, update, delete.

use crate::error::AppError;
use crate::extractors::{CustomerId, JsonBody};
use crate::model::CustomerInput;
use crate::service::CustomerService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CustomerInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customer = CustomerService::create(&state.pool, input).await?;
    tracing::info!(id = customer.id, "customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn read(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let customer = CustomerService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok((StatusCode::OK, Json(customer)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let customers = CustomerService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(customers)))
}

/// Echoes the input with the path id whether or not a row was updated.
pub async fn update(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
    JsonBody(input): JsonBody<CustomerInput>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let affected = CustomerService::update(&state.pool, id, &input).await?;
    tracing::info!(id, affected, "customer updated");
    Ok((StatusCode::OK, Json(input.with_id(id))))
}

/// Succeeds whether or not a row existed.
pub async fn delete(
    State(state): State<AppState>,
    CustomerId(id): CustomerId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let affected = CustomerService::delete(&state.pool, id).await?;
    tracing::info!(id, affected, "customer deleted");
    Ok((
        StatusCode::OK,
        Json(MessageBody {
            message: "customer deleted",
        }),
    ))
}
