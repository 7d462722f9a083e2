use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validator::not_blank;

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank", message = "email must not be blank"))]
    #[schema(example = "yoga@studio.com")]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "password must not be blank"))]
    #[schema(example = "test!1234")]
    pub password: String,
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        email(message = "email must be a well-formed email address"),
        length(max = 50, message = "email must be at most 50 characters")
    )]
    pub email: String,
    #[validate(length(min = 3, max = 20, message = "firstName must be between 3 and 20 characters"))]
    pub first_name: String,
    #[validate(length(min = 3, max = 20, message = "lastName must be between 3 and 20 characters"))]
    pub last_name: String,
    #[validate(length(min = 6, max = 40, message = "password must be between 6 and 40 characters"))]
    pub password: String,
}

/// Issued token and the identity it was issued for.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JwtResponse {
    pub token: String,
    /// Always `Bearer`
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Passwords stay out of spans
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, first_name: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(register("jane@doe.com", "Jane", "secret1").validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email_and_short_password() {
        let errors = register("not-an-email", "Jane", "123").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_register_request_reads_camel_case() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"jane@doe.com","firstName":"Jane","lastName":"Doe","password":"secret1"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, "Jane");
        assert_eq!(req.last_name, "Doe");
    }

    #[test]
    fn test_jwt_response_shape() {
        let json = serde_json::to_value(JwtResponse {
            token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            id: 1,
            username: "yoga@studio.com".to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
            admin: true,
        })
        .unwrap();

        assert_eq!(json["type"], "Bearer");
        assert_eq!(json["firstName"], "Admin");
        assert_eq!(json["admin"], true);
    }

    #[test]
    fn test_login_request_debug_hides_password() {
        let req = LoginRequest {
            email: "a@b.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(!format!("{:?}", req).contains("hunter22"));
    }
}
