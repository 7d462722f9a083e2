//! # Yoga DB
//!
//! Database pool and migrations for the Yoga API.
//!
//! The store is SQLite through SQLx. Foreign keys are switched on for every
//! connection so that participation rows follow their session and user.
//!
//! # Example
//!
//! ```ignore
//! use yoga_config::DatabaseConfig;
//! use yoga_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     Ok(())
//! }
//! ```

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use yoga_config::DatabaseConfig;

// Re-export the pool type for convenience
pub use sqlx::SqlitePool;

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects to the configured database and brings the schema up to date.
///
/// The database file is created when it does not exist yet.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;
    info!(url = %config.url, "Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_in_memory_pool_runs_migrations() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let pool = init_db_pool(&config).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        for table in ["participate", "sessions", "teachers", "users"] {
            assert!(tables.iter().any(|t| t == table), "missing table {}", table);
        }
    }
}
