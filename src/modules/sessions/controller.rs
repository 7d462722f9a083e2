use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use yoga_core::{AppError, ErrorResponse, parse_id};

use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::mapper::{to_dto_list, to_entity};
use super::model::SessionDto;
use super::service::SessionService;

/// List all sessions
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "List of sessions", body = Vec<SessionDto>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn find_all_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionDto>>, AppError> {
    let sessions = SessionService::find_all(&state.db).await?;
    Ok(Json(to_dto_list(&sessions)))
}

/// Get a session by id
#[utoipa::path(
    get,
    path = "/api/session/{id}",
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session details", body = SessionDto),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn find_session_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionDto>, AppError> {
    let id = parse_id(&id)?;

    let session = SessionService::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Session with id {} not found", id)))?;

    Ok(Json(SessionDto::from(&session)))
}

/// Create a session
#[utoipa::path(
    post,
    path = "/api/session",
    request_body = SessionDto,
    responses(
        (status = 200, description = "Session created", body = SessionDto),
        (status = 400, description = "Validation error or unknown teacher/user", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SessionDto>,
) -> Result<Json<SessionDto>, AppError> {
    let session = to_entity(&state.db, &dto).await?;
    let session = SessionService::create(&state.db, session).await?;

    Ok(Json(SessionDto::from(&session)))
}

/// Update a session
#[utoipa::path(
    put,
    path = "/api/session/{id}",
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    request_body = SessionDto,
    responses(
        (status = 200, description = "Session updated", body = SessionDto),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<SessionDto>,
) -> Result<Json<SessionDto>, AppError> {
    let id = parse_id(&id)?;

    // A missing session wins over unresolvable references in the body
    if !SessionService::exists(&state.db, id).await? {
        return Err(AppError::not_found(format!(
            "Session with id {} not found",
            id
        )));
    }

    let session = to_entity(&state.db, &dto).await?;
    let session = SessionService::update(&state.db, id, session, dto.users.is_some()).await?;

    Ok(Json(SessionDto::from(&session)))
}

/// Delete a session
#[utoipa::path(
    delete,
    path = "/api/session/{id}",
    params(
        ("id" = String, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    SessionService::delete(&state.db, id).await?;

    Ok(Json(MessageResponse::new("Session deleted successfully!")))
}

/// Join a session
#[utoipa::path(
    post,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = String, Path, description = "Session ID"),
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User added to the session", body = SessionDto),
        (status = 400, description = "Invalid ids, unknown session or user, or already participating", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn participate(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<Json<SessionDto>, AppError> {
    let id = parse_id(&id)?;
    let user_id = parse_id(&user_id)?;

    let session = SessionService::participate(&state.db, id, user_id).await?;
    Ok(Json(SessionDto::from(&session)))
}

/// Leave a session
#[utoipa::path(
    delete,
    path = "/api/session/{id}/participate/{user_id}",
    params(
        ("id" = String, Path, description = "Session ID"),
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User removed from the session", body = SessionDto),
        (status = 400, description = "Invalid ids, unknown session, or not participating", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn no_longer_participate(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<Json<SessionDto>, AppError> {
    let id = parse_id(&id)?;
    let user_id = parse_id(&user_id)?;

    let session = SessionService::no_longer_participate(&state.db, id, user_id).await?;
    Ok(Json(SessionDto::from(&session)))
}
