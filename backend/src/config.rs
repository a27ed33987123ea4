use sqlx::postgres::PgConnectOptions;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid port: {value}")]
    InvalidPort { name: &'static str, value: String },
}

/// Connection settings for the Postgres database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    /// Reads configuration from the process environment. `.env` should already
    /// have been loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port: parse_port("DB_PORT", lookup("DB_PORT"), DEFAULT_DB_PORT)?,
            user: required("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: required("DB_NAME")?,
        };

        Ok(Config {
            port: parse_port("PORT", lookup("PORT"), DEFAULT_PORT)?,
            database,
        })
    }
}

fn parse_port(name: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) if value.is_empty() => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { name, value }),
    }
}
