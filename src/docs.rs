use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use yoga_core::{ErrorResponse, FieldError};

use crate::modules::auth::model::{JwtResponse, LoginRequest, MessageResponse, RegisterRequest};
use crate::modules::sessions::model::SessionDto;
use crate::modules::teachers::model::TeacherDto;
use crate::modules::users::model::UserDto;
use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health_check,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::register,
        crate::modules::users::controller::find_user_by_id,
        crate::modules::users::controller::delete_user,
        crate::modules::teachers::controller::find_all_teachers,
        crate::modules::teachers::controller::find_teacher_by_id,
        crate::modules::sessions::controller::find_all_sessions,
        crate::modules::sessions::controller::find_session_by_id,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
        crate::modules::sessions::controller::participate,
        crate::modules::sessions::controller::no_longer_participate,
    ),
    components(
        schemas(
            LoginRequest,
            RegisterRequest,
            JwtResponse,
            MessageResponse,
            UserDto,
            TeacherDto,
            SessionDto,
            HealthResponse,
            ErrorResponse,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and registration"),
        (name = "Users", description = "User accounts"),
        (name = "Teachers", description = "Teachers giving the sessions"),
        (name = "Sessions", description = "Yoga sessions and participation"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "Yoga API",
        version = "0.1.0",
        description = "Session booking API for a yoga studio, built with Rust, Axum and SQLite, secured with JWT bearer tokens.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_session_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/api/session/{id}/participate/{user_id}"));
        assert!(paths.iter().any(|p| *p == "/api/auth/login"));
        assert!(
            doc.components
                .as_ref()
                .is_some_and(|c| c.security_schemes.contains_key("bearer_auth"))
        );
    }
}
