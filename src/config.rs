//! Process-wide configuration assembled from the environment.
//!
//! The individual sections live in `yoga_config`; this module only bundles
//! them so `main` can load everything in one call after `.env` is read.

use yoga_config::{CorsConfig, DatabaseConfig, JwtConfig, RateLimitConfig, ServerConfig};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    /// `METRICS_ENABLED`, defaults to true
    pub metrics_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cors: CorsConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            metrics_enabled: std::env::var("METRICS_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
