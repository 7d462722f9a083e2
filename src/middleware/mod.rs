//! Request middleware and extractors.
//!
//! - [`auth`]: bearer token verification (`require_auth`) and the
//!   [`AuthUser`](auth::AuthUser) extractor
//! - [`rate_limit`]: per-client throttling of the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `require_auth` verifies signature and expiry and stores the claims in
//!    the request extensions, or answers 401
//! 3. Handlers read the principal through `AuthUser`

pub mod auth;
pub mod rate_limit;
