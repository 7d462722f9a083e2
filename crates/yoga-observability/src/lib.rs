//! Yoga Observability
//!
//! - [`logging`]: tracing subscriber setup and the per-request logging middleware
//! - [`metrics`]: Prometheus recorder, HTTP metrics middleware and business counters
//!
//! Metrics can be switched off at runtime with `OBSERVABILITY_ENABLED=false`;
//! console logging is always on.
//!
//! ```no_run
//! use yoga_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let handle = init_metrics();
//!     // ... application code ...
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    PrometheusHandle, init_metrics, is_observability_enabled, metrics_middleware,
    track_jwt_issued, track_participation, track_user_login_failure, track_user_login_success,
    track_user_registered,
};
