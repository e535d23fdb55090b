use std::env;

use sqlx::mysql::MySqlConnectOptions;

use crate::error::{BootstrapError, Result};

/// Connection parameters for the MySQL server.
///
/// Every field falls back to the fixed development defaults so a bare run
/// connects to the stock compose setup. `DATABASE_URL`, when present,
/// overrides the individual variables wholesale.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub charset: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("DB_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                BootstrapError::Config(format!("DB_PORT is not a valid port number: {}", raw))
            })?,
            Err(_) => 3306,
        };

        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL").ok(),
            host: env::var("DB_HOST").unwrap_or_else(|_| "mysql".to_string()),
            port,
            database: env::var("DB_NAME").unwrap_or_else(|_| "phpapp".to_string()),
            username: env::var("DB_USER").unwrap_or_else(|_| "phpuser".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "phppass".to_string()),
            charset: env::var("DB_CHARSET").unwrap_or_else(|_| "utf8".to_string()),
        })
    }

    /// Typed connect options for the configured server.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions> {
        if let Some(url) = &self.url {
            return url.parse::<MySqlConnectOptions>().map_err(|e| {
                BootstrapError::Config(format!("DATABASE_URL is not a valid MySQL URL: {}", e))
            });
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
            .charset(&self.charset))
    }
}
