//! Server Configuration
//!
//! Read once at startup. Any malformed value aborts the process.

use anyhow::{Context, bail};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

/// Top-level server configuration
pub struct ServerConfig {
    /// `APP_CONTAINER_PORT`
    pub port: u16,
    pub database: DatabaseConfig,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: Vec<String>,
}

/// PostgreSQL connection settings
///
/// `DATABASE_URL` wins over the individual `POSTGRES_*` parts.
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(get("APP_CONTAINER_PORT"), "APP_CONTAINER_PORT", DEFAULT_PORT)?;

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(get("POSTGRES_PORT"), "POSTGRES_PORT", 5432)?,
            user: get("POSTGRES_USER").unwrap_or_else(|| "postgres".to_string()),
            password: lookup("POSTGRES_PASSWORD").unwrap_or_default(),
            name: get("POSTGRES_DB").unwrap_or_else(|| "vocabularies".to_string()),
            ssl_mode: match get("POSTGRES_SSLMODE") {
                Some(raw) => PgSslMode::from_str(raw.trim())
                    .with_context(|| format!("POSTGRES_SSLMODE has an unknown value: {raw}"))?,
                None => PgSslMode::Prefer,
            },
            max_connections: parse_or(
                get("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        if database.max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            port,
            database,
            frontend_origins,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).context("DATABASE_URL is not a valid URL");
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode))
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.port, 8080);
        assert!(config.database.url.is_none());
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.name, "vocabularies");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.frontend_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_reads_postgres_parts() {
        let config = load(&[
            ("APP_CONTAINER_PORT", "8000"),
            ("POSTGRES_HOST", "db"),
            ("POSTGRES_PORT", "15432"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "secret"),
            ("POSTGRES_DB", "ielts"),
            ("POSTGRES_SSLMODE", "disable"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
        ])
        .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.port, 15432);
        assert_eq!(config.database.user, "app");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "ielts");
        assert!(matches!(config.database.ssl_mode, PgSslMode::Disable));
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.connect_options().is_ok());
    }

    #[test]
    fn test_database_url_parsed() {
        let config = load(&[("DATABASE_URL", "postgres://app:secret@db:5432/ielts")]).unwrap();
        assert!(config.database.connect_options().is_ok());

        let config = load(&[("DATABASE_URL", "not a url")]).unwrap();
        assert!(config.database.connect_options().is_err());
    }

    #[test]
    fn test_invalid_values_are_fatal() {
        assert!(load(&[("APP_CONTAINER_PORT", "http")]).is_err());
        assert!(load(&[("APP_CONTAINER_PORT", "70000")]).is_err());
        assert!(load(&[("POSTGRES_SSLMODE", "sometimes")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
    }

    #[test]
    fn test_origins_are_split() {
        let config = load(&[("FRONTEND_ORIGINS", "http://a.test, http://b.test,")]).unwrap();
        assert_eq!(config.frontend_origins, vec!["http://a.test", "http://b.test"]);
    }
}
