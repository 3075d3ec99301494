//! Service settings read from the environment (and `.env` via dotenvy in the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const TOKEN_VAR: &str = "CUSTOMER_API_TOKEN";
pub const BIND_VAR: &str = "CUSTOMER_API_BIND";
pub const MAX_CONNECTIONS_VAR: &str = "CUSTOMER_API_MAX_CONNECTIONS";
pub const BODY_LIMIT_VAR: &str = "CUSTOMER_API_BODY_LIMIT";

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/customers";
pub const DEFAULT_TOKEN: &str = "token2019";
pub const DEFAULT_BIND: &str = "0.0.0.0:2019";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    /// Shared secret every caller must send verbatim in `Authorization`.
    pub auth_token: String,
    pub bind: SocketAddr,
    pub max_connections: u32,
    pub body_limit: usize,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let auth_token = match lookup(TOKEN_VAR) {
            Some(t) if t.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    var: TOKEN_VAR,
                    reason: "must not be empty".into(),
                })
            }
            Some(t) => t.trim().to_string(),
            None => DEFAULT_TOKEN.into(),
        };
        let bind = get(BIND_VAR)
            .unwrap_or_else(|| DEFAULT_BIND.into())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_VAR,
                reason: e.to_string(),
            })?;
        let max_connections = match get(MAX_CONNECTIONS_VAR) {
            Some(v) => parse_positive(MAX_CONNECTIONS_VAR, &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let body_limit = match get(BODY_LIMIT_VAR) {
            Some(v) => parse_positive(BODY_LIMIT_VAR, &v)?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(ServiceConfig {
            database_url,
            auth_token,
            bind,
            max_connections,
            body_limit,
        })
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let n: T = raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })?;
    if n == T::default() {
        return Err(ConfigError::Invalid {
            var,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(n)
}
