use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use yoga_core::{AppError, ErrorResponse, parse_id};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;

use super::model::UserDto;
use super::service::UserService;

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn find_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, AppError> {
    let id = parse_id(&id)?;

    let user = UserService::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User with id {} not found", id)))?;

    Ok(Json(UserDto::from(&user)))
}

/// Delete an account. Only the account owner may do this.
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Not the account owner", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;

    let user = UserService::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User with id {} not found", id)))?;

    if auth_user.username() != user.email {
        return Err(AppError::unauthorized(
            "You can only delete your own account",
        ));
    }

    UserService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully!")))
}
