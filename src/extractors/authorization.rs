//! Extract the raw `Authorization` header value.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Raw `Authorization` header value, `None` when absent or not visible ASCII.
/// The value is not trimmed: the shared secret must match byte for byte.
#[derive(Clone, Debug)]
pub struct AuthorizationHeader(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for AuthorizationHeader
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok(AuthorizationHeader(value))
    }
}
