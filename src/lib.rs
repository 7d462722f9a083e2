//! # Yoga API
//!
//! Session booking backend for a yoga studio, built with Axum and SQLite.
//!
//! Members register and log in with a JWT, browse the sessions given by the
//! studio's teachers, and join or leave them.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config.rs        # AppConfig bundling every env-driven section
//! ├── middleware/      # require_auth, AuthUser extractor, auth rate limiting
//! ├── modules/         # Feature modules
//! │   ├── auth/        # Login and registration
//! │   ├── users/       # Account lookup and deletion
//! │   ├── teachers/    # Teacher listing
//! │   └── sessions/    # Sessions and participation
//! ├── docs.rs          # OpenAPI document
//! ├── metrics.rs       # Prometheus scrape endpoint
//! ├── router.rs        # Route tree and global layers
//! ├── state.rs         # Shared application state
//! └── validator.rs     # ValidatedJson extractor
//! ```
//!
//! Shared building blocks live in the workspace crates: `yoga_core` (errors,
//! password hashing, id parsing), `yoga_config`, `yoga_db` (pool and
//! migrations), `yoga_auth` (JWT) and `yoga_observability` (logging and
//! metrics).
//!
//! ## Authentication
//!
//! `POST /api/auth/login` returns a bearer token. Every other `/api` route
//! requires `Authorization: Bearer <token>` and answers 401 without it.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://yoga.db?mode=rwc
//! JWT_SECRET=your-secure-secret-key
//! cargo run --bin yoga-cli -- create-admin
//! cargo run
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod config;
pub mod docs;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use yoga_auth;
pub use yoga_config;
pub use yoga_core;
pub use yoga_db;
pub use yoga_observability;
