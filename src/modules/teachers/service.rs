use anyhow::Context;
use sqlx::SqlitePool;
use tracing::instrument;
use yoga_core::AppError;

use super::model::Teacher;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &SqlitePool) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch teachers")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, created_at, updated_at FROM teachers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher by id")
        .map_err(AppError::database)
    }
}
