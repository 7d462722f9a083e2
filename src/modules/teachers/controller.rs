use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use yoga_core::{AppError, ErrorResponse, parse_id};

use crate::state::AppState;

use super::mapper::to_dto_list;
use super::model::TeacherDto;
use super::service::TeacherService;

/// List all teachers
#[utoipa::path(
    get,
    path = "/api/teacher",
    responses(
        (status = 200, description = "List of teachers", body = Vec<TeacherDto>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn find_all_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherDto>>, AppError> {
    let teachers = TeacherService::find_all(&state.db).await?;
    Ok(Json(to_dto_list(&teachers)))
}

/// Get a teacher by id
#[utoipa::path(
    get,
    path = "/api/teacher/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher details", body = TeacherDto),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn find_teacher_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeacherDto>, AppError> {
    let id = parse_id(&id)?;

    let teacher = TeacherService::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Teacher with id {} not found", id)))?;

    Ok(Json(TeacherDto::from(&teacher)))
}
