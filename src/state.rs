use std::sync::Arc;

use yoga_config::{CorsConfig, JwtConfig, RateLimitConfig};
use yoga_db::{SqlitePool, init_db_pool};
use yoga_observability::PrometheusHandle;

use crate::config::AppConfig;
use crate::middleware::rate_limit::{AuthRateLimiter, build_auth_limiter};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub auth_limiter: Arc<AuthRateLimiter>,
    /// Present when the Prometheus recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        rate_limit_config: RateLimitConfig,
    ) -> Self {
        let auth_limiter = Arc::new(build_auth_limiter(&rate_limit_config));

        Self {
            db,
            jwt_config,
            cors_config,
            auth_limiter,
            metrics_handle: None,
        }
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics_handle = handle;
        self
    }
}

pub async fn init_app_state(config: &AppConfig) -> Result<AppState, sqlx::Error> {
    let db = init_db_pool(&config.database).await?;

    Ok(AppState::new(
        db,
        config.jwt.clone(),
        config.cors.clone(),
        config.rate_limit.clone(),
    ))
}
