use anyhow::{bail, Context, Result};
use std::env;
use uuid::Uuid;

use infra::db::DatabaseConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "postgres" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => bail!("unknown STORE_BACKEND: {other}"),
        }
    }
}

/// Runtime settings. `from_env` is what the binary uses and defaults to the
/// Postgres backend; `Default` is the in-process preset for tests and local runs.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub store_backend: StoreBackend,
    /// Only present for the Postgres backend.
    pub database: Option<DatabaseConfig>,
    pub skip_migrations: bool,
    pub port: u16,
    pub bcrypt_cost: u32,
    /// Creator used for `createEvent` when the request carries no caller identity.
    pub default_creator_id: Option<Uuid>,
    pub introspection_enabled: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_backend: StoreBackend::Memory,
            database: None,
            skip_migrations: false,
            port: 3000,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            default_creator_id: None,
            introspection_enabled: false,
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let store_backend = match env::var("STORE_BACKEND") {
            Ok(raw) => StoreBackend::parse(&raw)?,
            Err(_) => StoreBackend::Postgres,
        };

        let database = match store_backend {
            StoreBackend::Postgres => Some(database_from_env()?),
            StoreBackend::Memory => None,
        };

        let default_creator_id = match env::var("DEFAULT_CREATOR_ID") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                Uuid::parse_str(raw.trim()).context("DEFAULT_CREATOR_ID must be a UUID")?,
            ),
            _ => None,
        };

        Ok(Self {
            store_backend,
            database,
            skip_migrations: env::var("SKIP_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(bcrypt::DEFAULT_COST),
            default_creator_id,
            introspection_enabled: env::var("GQL_INTROSPECTION")
                .map(|v| v == "true")
                .unwrap_or(false),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        })
    }
}

fn database_from_env() -> Result<DatabaseConfig> {
    Ok(DatabaseConfig {
        host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        port: env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .context("DB_PORT must be a valid port number")?,
        username: env::var("DB_USER").context("DB_USER must be set")?,
        password: env::var("DB_PASSWORD").context("DB_PASSWORD must be set")?,
        database: env::var("DB_NAME").context("DB_NAME must be set")?,
        max_connections: env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30),
    })
}
