//! # Yoga CLI
//!
//! Administrative and seeding utilities for the Yoga API database.
//!
//! ## Usage
//!
//! ```ignore
//! use yoga_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(5, 40, 12);
//! seed_all(&pool, config).await?;
//! ```

pub mod admin;
pub mod seeder;
