//! Parsing of numeric entity ids taken from request paths.
//!
//! Routes capture ids as text so that a malformed value is answered with a
//! structured 400 instead of the framework's plain-text path rejection.

use crate::errors::AppError;

pub type EntityId = i64;

pub fn parse_id(raw: &str) -> Result<EntityId, AppError> {
    raw.parse::<EntityId>()
        .map_err(|_| AppError::bad_request(format!("Invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
    }

    #[test]
    fn test_parse_invalid_id() {
        for raw in ["invalidId", "", " 1", "1.5", "99999999999999999999"] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST, "raw = {:?}", raw);
        }
    }
}
