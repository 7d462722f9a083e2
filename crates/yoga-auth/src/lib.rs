//! # Yoga Auth
//!
//! Authentication types and JWT utilities for the Yoga API.
//!
//! - [`claims`]: the access token claim structure
//! - [`jwt`]: token creation and verification

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TOKEN_TYPE, create_access_token, verify_token};
