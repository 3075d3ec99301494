//! Request extractors.

pub mod authorization;
pub mod customer_id;
pub mod json;

pub use authorization::AuthorizationHeader;
pub use customer_id::CustomerId;
pub use json::JsonBody;
