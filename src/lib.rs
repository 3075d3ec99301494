//! Customer API: CRUD REST service for a single `customer` table.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use model::{Customer, CustomerInput};
pub use routes::{app, common_routes, customer_routes};
pub use service::CustomerService;
pub use state::AppState;
pub use store::{ensure_customer_table, init};
