//! Application configuration loaded from environment variables.

use std::env;

use finlearn_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Insert the sample catalog on startup when the collections are empty.
    pub seed_sample_data: bool,
    /// Store Argon2 hashes instead of plaintext credentials.
    pub argon2_credentials: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            argon2_credentials: env::var("CREDENTIAL_VERIFIER")
                .map(|v| v == "argon2")
                .unwrap_or(false),
        }
    }
}
