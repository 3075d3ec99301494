//! Pool lifecycle and `customer` table DDL.

use crate::config::{ServiceConfig, DATABASE_URL_VAR};
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

pub const CUSTOMER_TABLE: &str = "customer";

/// Create the customer table if it does not exist. Safe to run on every start.
pub async fn ensure_customer_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT,
            email TEXT,
            status TEXT
        )
        "#,
        CUSTOMER_TABLE
    );
    tracing::debug!(sql = %ddl, "query");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Open the pool. Never fails: if the database cannot be reached the error is
/// logged and a lazily-connecting pool is returned, so the service starts
/// degraded instead of exiting. An unparsable URL falls back to the libpq
/// defaults (`PGHOST`, `PGPORT`, ... or localhost).
pub async fn connect(config: &ServiceConfig) -> PgPool {
    let options = PgPoolOptions::new().max_connections(config.max_connections);
    match options.clone().connect(&config.database_url).await {
        Ok(pool) => {
            tracing::info!(max_connections = config.max_connections, "connected to database");
            pool
        }
        Err(e) => {
            tracing::error!(error = %e, "database connection failed; continuing without a live connection");
            options.clone().connect_lazy(&config.database_url).unwrap_or_else(|e| {
                tracing::error!(error = %e, var = DATABASE_URL_VAR, "unusable database url; using default connection options");
                options.connect_lazy_with(PgConnectOptions::new())
            })
        }
    }
}

/// Open the pool and create the table. A failed table creation is logged, not fatal.
pub async fn init(config: &ServiceConfig) -> PgPool {
    let pool = connect(config).await;
    match ensure_customer_table(&pool).await {
        Ok(()) => tracing::info!(table = CUSTOMER_TABLE, "table ready"),
        Err(e) => tracing::error!(error = %e, table = CUSTOMER_TABLE, "unable to create table"),
    }
    pool
}

/// Storage state as seen by `/ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    TableMissing,
    Unavailable,
}

/// Probe the pool and the customer table with a single statement.
pub async fn readiness(pool: &PgPool) -> Readiness {
    let sql = format!("SELECT to_regclass('{}') IS NOT NULL", CUSTOMER_TABLE);
    match sqlx::query_scalar::<_, bool>(&sql).fetch_one(pool).await {
        Ok(true) => Readiness::Ready,
        Ok(false) => Readiness::TableMissing,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            Readiness::Unavailable
        }
    }
}
