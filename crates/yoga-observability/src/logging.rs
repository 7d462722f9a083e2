use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "storage/logs";

/// Emits one event per request with method, matched path, status and latency.
///
/// The level follows the status class: info for success, warn for client
/// errors, error for server errors.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = status,
            latency_ms = %latency.as_millis(),
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = status,
            latency_ms = %latency.as_millis(),
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status = status,
            latency_ms = %latency.as_millis(),
            "Request completed"
        ),
    }

    response
}

fn file_logging_enabled() -> bool {
    std::env::var("LOG_TO_FILE")
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(true)
}

/// Installs the global tracing subscriber.
///
/// Console output is filtered by `RUST_LOG` (default
/// `yoga=info,tower_http=warn,sqlx=warn`). Unless `LOG_TO_FILE=false`, errors
/// also go to `storage/logs/yoga.log` and info-level structured JSON to
/// `storage/logs/yoga.json`, both rotated daily.
pub fn init_tracing() {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("yoga=info,yoga_core=info,yoga_db=info,tower_http=warn,sqlx=warn")
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(console_filter);

    let files_ready = file_logging_enabled() && std::fs::create_dir_all(LOG_DIR).is_ok();

    let file_layer = files_ready.then(|| {
        fmt::layer()
            .with_writer(RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "yoga.log"))
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(EnvFilter::new("error"))
    });

    let json_layer = files_ready.then(|| {
        fmt::layer()
            .json()
            .with_writer(RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "yoga.json"))
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .init();

    if files_ready {
        info!(dir = LOG_DIR, "Tracing initialized with console and file logging");
    } else {
        info!("Tracing initialized with console logging only");
    }
}
