use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;
use yoga_observability::{logging_middleware, metrics_middleware};

use crate::docs::ApiDoc;
use crate::metrics::init_metrics_router;
use crate::middleware::auth::require_auth;
use crate::middleware::rate_limit::rate_limit_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::sessions::router::init_sessions_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let auth_layer = || middleware::from_fn_with_state(state.clone(), require_auth);

    let protected = Router::new()
        .nest("/user", init_users_router().route_layer(auth_layer()))
        .nest("/session", init_sessions_router().route_layer(auth_layer()))
        .nest("/teacher", init_teachers_router().route_layer(auth_layer()));

    let auth = init_auth_router().route_layer(middleware::from_fn_with_state(
        state.clone(),
        rate_limit_auth,
    ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .merge(init_metrics_router())
        .nest("/api", Router::new().nest("/auth", auth).merge(protected))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
