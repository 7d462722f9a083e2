//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in every access token.
///
/// The subject is the username, which is the user's email address. The
/// remaining identity fields let handlers answer "who is calling" without a
/// database round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Username (subject claim)
    pub sub: String,
    /// Database id of the user
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn username(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "yoga@studio.com".to_string(),
            id: 1,
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            admin: true,
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"yoga@studio.com""#));
        assert!(serialized.contains(r#""admin":true"#));
        assert_eq!(claims.username(), "yoga@studio.com");
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"user@test.com","id":7,"first_name":"Ibra","last_name":"Dieng","admin":false,"exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user@test.com");
        assert_eq!(claims.id, 7);
        assert!(!claims.admin);
        assert_eq!(claims.exp, 9999999999);
    }
}
