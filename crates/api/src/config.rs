//! Environment-driven server configuration.

use std::env;

/// Runtime settings for the API server.
///
/// Every value has a local-development default, so the server starts with
/// no environment at all; production overrides via env vars.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub host: String,
    /// Port the listener binds to.
    pub port: u16,
    /// SQLite database URL. The file is created on first start.
    pub database_url: String,
    /// Origins admitted by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Read an environment variable, falling back to a default.
fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Load settings from the environment.
    ///
    /// Defaults: `HOST=0.0.0.0`, `PORT=5000`, `DATABASE_URL=sqlite:taskbox.db`,
    /// `CORS_ORIGINS=http://localhost:3000` (comma-separated list),
    /// `REQUEST_TIMEOUT_SECS=30`.
    ///
    /// Panics when a numeric variable fails to parse.
    pub fn from_env() -> Self {
        let port = env_or("PORT", "5000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            database_url: env_or("DATABASE_URL", "sqlite:taskbox.db"),
            cors_origins,
            request_timeout_secs,
        }
    }
}
