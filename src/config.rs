use std::env;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// Full `mysql://` URL. When set, the individual parts below are ignored.
    pub url: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
                user: text("DB_USER", "root"),
                password: text("DB_PASSWORD", ""),
                host: text("DB_HOST", "localhost"),
                port: parse_or(&lookup, "DB_PORT", 3306)?,
                name: text("DB_NAME", "db_skripsi_2"),
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            },
            server_host: text("SERVER_HOST", "0.0.0.0"),
            server_port: parse_or(&lookup, "SERVER_PORT", 50051)?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", key, raw))),
        None => Ok(default),
    }
}
