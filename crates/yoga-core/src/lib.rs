//! # Yoga Core
//!
//! Core types, errors, and utilities for the Yoga API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`ids`]: Parsing of numeric ids captured from request paths
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Lenient deserializers for request bodies
//!
//! # Example
//!
//! ```ignore
//! use yoga_core::{AppError, hash_password, parse_id};
//!
//! let id = parse_id("12")?;
//! let hash = hash_password("secure_password")?;
//! let error = AppError::not_found("Session not found");
//! ```

pub mod errors;
pub mod ids;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, FieldError};
pub use ids::{EntityId, parse_id};
pub use password::{hash_password, verify_password};
