//! Issuing and verifying access tokens.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`] and valid for
//! [`JwtConfig::expiry`] seconds.
//!
//! # Example
//!
//! ```ignore
//! use yoga_auth::{create_access_token, verify_token};
//! use yoga_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(1, "yoga@studio.com", "Admin", "Admin", true, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "yoga@studio.com");
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use yoga_config::JwtConfig;
use yoga_core::AppError;

use crate::claims::Claims;

/// The token type announced to clients alongside every issued token.
pub const TOKEN_TYPE: &str = "Bearer";

/// Creates a signed access token for the given user.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_access_token(
    user_id: i64,
    username: &str,
    first_name: &str,
    last_name: &str,
    admin: bool,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.expiry as usize;

    let claims = Claims {
        sub: username.to_string(),
        id: user_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        admin,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry, returning the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, signed with
/// another secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            expiry: 3600,
        }
    }

    #[test]
    fn test_create_and_verify_token() {
        let config = get_test_jwt_config();

        let token =
            create_access_token(10, "ibra@test.com", "ibra", "dieng", true, &config).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "ibra@test.com");
        assert_eq!(claims.id, 10);
        assert_eq!(claims.first_name, "ibra");
        assert_eq!(claims.last_name, "dieng");
        assert!(claims.admin);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid-token", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(1, "a@b.com", "A", "B", false, &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            expiry: 3600,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "late@test.com".to_string(),
            id: 3,
            first_name: "Late".to_string(),
            last_name: "User".to_string(),
            admin: false,
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
