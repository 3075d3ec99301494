//! `:id` path segment parsed as a customer id.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Integer customer id from the path. Undecodable or non-integer segments are 400.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustomerId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(format!("invalid customer id: {}", rejection.body_text())))?;
        parse_id(&raw).map(CustomerId)
    }
}

pub(crate) fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid customer id: {}", id_str)))
}
