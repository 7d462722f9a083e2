use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use yoga_core::AppError;
use yoga_observability::track_participation;

use crate::modules::teachers::service::TeacherService;
use crate::modules::users::service::UserService;

use super::model::{Session, SessionRow};

const SESSION_COLUMNS: &str =
    "id, name, date, description, teacher_id, created_at, updated_at";

pub struct SessionService;

impl SessionService {
    #[instrument(skip(db))]
    pub async fn find_all(db: &SqlitePool) -> Result<Vec<Session>, AppError> {
        let rows = sqlx::query_as::<_, SessionRow>(&format!(
            "SELECT {} FROM sessions ORDER BY id",
            SESSION_COLUMNS
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch sessions")
        .map_err(AppError::database)?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in rows {
            sessions.push(Self::load(db, row).await?);
        }

        Ok(sessions)
    }

    /// Returns `None` when no session has this id.
    #[instrument(skip(db))]
    pub async fn get_by_id(db: &SqlitePool, id: i64) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(&format!(
            "SELECT {} FROM sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch session by id")
        .map_err(AppError::database)?;

        match row {
            Some(row) => Ok(Some(Self::load(db, row).await?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(db))]
    pub async fn exists(db: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_one(db)
            .await
            .context("Failed to check session")
            .map_err(AppError::database)?;

        Ok(count > 0)
    }

    #[instrument(skip(db, session), fields(name = %session.name))]
    pub async fn create(db: &SqlitePool, mut session: Session) -> Result<Session, AppError> {
        session.id = None;
        let session = Self::save(db, session).await?;

        info!(session_id = ?session.id, "Session created");
        Ok(session)
    }

    /// Replaces the fields of session `id`.
    ///
    /// With `replace_participants` false the stored participant list is kept
    /// and `session.users` is ignored.
    #[instrument(skip(db, session))]
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        mut session: Session,
        replace_participants: bool,
    ) -> Result<Session, AppError> {
        let existing = Self::get_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session with id {} not found", id)))?;

        session.id = Some(id);
        session.created_at = existing.created_at;
        if !replace_participants {
            session.users = existing.users;
        }

        Self::save(db, session).await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete session")
            .map_err(AppError::database)?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::not_found(format!(
                "Session with id {} not found",
                id
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn participate(
        db: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Session, AppError> {
        let mut session = Self::get_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::bad_request(format!("Session with id {} not found", id)))?;

        let user = UserService::find_by_id(db, user_id)
            .await?
            .ok_or_else(|| AppError::bad_request(format!("User with id {} not found", user_id)))?;

        if session.is_participant(user_id) {
            return Err(AppError::bad_request(
                "User already participates in this session",
            ));
        }

        session.users.push(user);
        let session = Self::save(db, session).await?;

        track_participation("join");
        Ok(session)
    }

    #[instrument(skip(db))]
    pub async fn no_longer_participate(
        db: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Session, AppError> {
        let mut session = Self::get_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::bad_request(format!("Session with id {} not found", id)))?;

        if !session.is_participant(user_id) {
            return Err(AppError::bad_request(
                "User does not participate in this session",
            ));
        }

        session.users.retain(|u| u.id != user_id);
        let session = Self::save(db, session).await?;

        track_participation("leave");
        Ok(session)
    }

    /// Inserts or updates the session row and rewrites its participant rows,
    /// all in one transaction.
    #[instrument(skip(db, session), fields(session_id = ?session.id))]
    pub async fn save(db: &SqlitePool, mut session: Session) -> Result<Session, AppError> {
        let now = Utc::now();
        let teacher_id = session.teacher.as_ref().map(|t| t.id);

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let id = match session.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE sessions
                     SET name = $1, date = $2, description = $3, teacher_id = $4, updated_at = $5
                     WHERE id = $6",
                )
                .bind(&session.name)
                .bind(session.date)
                .bind(&session.description)
                .bind(teacher_id)
                .bind(now)
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("Failed to update session")
                .map_err(AppError::database)?;
                id
            }
            None => {
                let id = sqlx::query_scalar::<_, i64>(
                    "INSERT INTO sessions (name, date, description, teacher_id, created_at, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $5)
                     RETURNING id",
                )
                .bind(&session.name)
                .bind(session.date)
                .bind(&session.description)
                .bind(teacher_id)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .context("Failed to insert session")
                .map_err(AppError::database)?;
                session.created_at = Some(now);
                id
            }
        };

        sqlx::query("DELETE FROM participate WHERE session_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to clear participants")
            .map_err(AppError::database)?;

        for user_id in session.participant_ids() {
            sqlx::query("INSERT INTO participate (session_id, user_id) VALUES ($1, $2)")
                .bind(id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .context("Failed to insert participant")
                .map_err(AppError::database)?;
        }

        tx.commit()
            .await
            .context("Failed to commit session")
            .map_err(AppError::database)?;

        session.id = Some(id);
        session.updated_at = Some(now);
        Ok(session)
    }

    async fn load(db: &SqlitePool, row: SessionRow) -> Result<Session, AppError> {
        let teacher = match row.teacher_id {
            Some(teacher_id) => TeacherService::find_by_id(db, teacher_id).await?,
            None => None,
        };
        let users = UserService::find_by_session(db, row.id).await?;

        Ok(Session {
            id: Some(row.id),
            name: row.name,
            date: row.date,
            description: row.description,
            teacher,
            users,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}
