//! Feature modules. Each one has `controller.rs` (HTTP handlers),
//! `service.rs` (data access and rules), `model.rs` (entities and DTOs) and
//! `router.rs`; the entity modules add `mapper.rs` for DTO conversion.

pub mod auth;
pub mod sessions;
pub mod teachers;
pub mod users;
