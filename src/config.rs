use std::time::Duration;

use thiserror::Error;

use crate::auth::gate::DEFAULT_LOOKUP_TIMEOUT;
use crate::auth::token::DEFAULT_TTL_SECS;
use crate::auth::{PublicMatch, PublicPaths};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 25;

/// Whole-path allow-list used when exact matching is enabled without a list.
pub const EXACT_PUBLIC_PATHS: [&str; 2] = ["/users/login", "/users/register"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub token_ttl_secs: i64,
    pub lookup_timeout: Duration,
    pub public_paths: PublicPaths,
    pub db_max_connections: u32,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"[REDACTED]")
            .field("bind_addr", &self.bind_addr)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("lookup_timeout", &self.lookup_timeout)
            .field("public_paths", &self.public_paths)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            get(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let token_ttl_secs = parse_or(&get, "TOKEN_TTL_SECS", DEFAULT_TTL_SECS)?;
        if token_ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                name: "TOKEN_TTL_SECS",
                reason: "must be positive".into(),
            });
        }

        let lookup_timeout_ms = parse_or(
            &get,
            "LOOKUP_TIMEOUT_MS",
            DEFAULT_LOOKUP_TIMEOUT.as_millis() as u64,
        )?;
        let db_max_connections = parse_or(&get, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let mode = match get("AUTH_PUBLIC_MATCH") {
            Some(raw) => raw
                .parse::<PublicMatch>()
                .map_err(|reason| ConfigError::Invalid {
                    name: "AUTH_PUBLIC_MATCH",
                    reason,
                })?,
            None => PublicMatch::default(),
        };
        let public_paths = match (get("AUTH_PUBLIC_PATHS"), mode) {
            (Some(raw), _) => PublicPaths::new(raw.split(',').map(str::trim), mode),
            (None, PublicMatch::Substring) => PublicPaths::new(["/login", "/register"], mode),
            (None, PublicMatch::Exact) => PublicPaths::new(EXACT_PUBLIC_PATHS, mode),
        };

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            token_ttl_secs,
            lookup_timeout: Duration::from_millis(lookup_timeout_ms),
            public_paths,
            db_max_connections,
        })
    }
}

fn parse_or<F, T>(get: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
