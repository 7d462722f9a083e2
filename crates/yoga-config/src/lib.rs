//! # Yoga Config
//!
//! Configuration types for the Yoga API, loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime (`JWT_SECRET`, `JWT_EXPIRY`)
//! - [`cors`]: allowed browser origins (`CORS_ALLOWED_ORIGINS`)
//! - [`database`]: connection string and pool size (`DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`)
//! - [`rate_limit`]: authentication endpoint throttling
//! - [`server`]: listen address (`SERVER_HOST`, `SERVER_PORT`)
//!
//! Every variable has a default suitable for local development.

pub mod cors;
pub mod database;
pub mod jwt;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
