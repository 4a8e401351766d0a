//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
                min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
            });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(3000),
            database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
