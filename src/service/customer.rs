//! Customer statements against PostgreSQL. One statement per call, no transactions.

use crate::error::AppError;
use crate::model::{Customer, CustomerInput, CustomerRow};
use sqlx::PgPool;

const INSERT: &str = "INSERT INTO customer (name, email, status) VALUES ($1, $2, $3) RETURNING id";
const SELECT_BY_ID: &str = "SELECT id, name, email, status FROM customer WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, name, email, status FROM customer";
const UPDATE: &str = "UPDATE customer SET name = $2, email = $3, status = $4 WHERE id = $1";
const DELETE: &str = "DELETE FROM customer WHERE id = $1";

pub struct CustomerService;

impl CustomerService {
    /// Insert one row and return it with the id assigned by the database.
    /// The driver error is logged but not surfaced to the caller.
    pub async fn create(pool: &PgPool, input: CustomerInput) -> Result<Customer, AppError> {
        tracing::debug!(sql = %INSERT, "query");
        let id = sqlx::query_scalar::<_, i32>(INSERT)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.status)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "insert failed");
                AppError::BadRequest("unable to insert customer".into())
            })?;
        Ok(input.with_id(id))
    }

    /// Fetch one row by id. Returns None when no row matches.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<Customer>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, CustomerRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Customer::from))
    }

    /// Every row, in whatever order the database returns them. Fails as a whole
    /// if any row cannot be decoded.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, CustomerRow>(SELECT_ALL)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Overwrite all fields of the row with this id. Returns the number of rows affected;
    /// zero is not an error.
    pub async fn update(pool: &PgPool, id: i32, input: &CustomerInput) -> Result<u64, AppError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        let result = sqlx::query(UPDATE)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the row with this id. Returns the number of rows affected; zero is not an error.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}
