use anyhow::Context;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;
use yoga_core::AppError;

use super::model::{NewUser, User};

pub const EMAIL_TAKEN: &str = "Error: Email is already taken!";

const USER_COLUMNS: &str =
    "id, email, first_name, last_name, password, admin, created_at, updated_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by id")
            .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn exists_by_email(db: &SqlitePool, email: &str) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(db)
            .await
            .context("Failed to check email")
            .map_err(AppError::database)?;

        Ok(count > 0)
    }

    /// Inserts a user. An email that is already registered, including one
    /// that won a concurrent registration race, is a bad request.
    #[instrument(skip(db, new_user), fields(email = %new_user.email))]
    pub async fn create(db: &SqlitePool, new_user: NewUser) -> Result<User, AppError> {
        let now = Utc::now();

        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, first_name, last_name, password, admin, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&new_user.email)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.password_hash)
        .bind(new_user.admin)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::bad_request(EMAIL_TAKEN)
            }
            e => AppError::database(anyhow::Error::new(e).context("Failed to insert user")),
        })
    }

    /// Removes the user and its participations. Sessions are left in place.
    #[instrument(skip(db))]
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM participate WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to remove user participations")
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        tx.commit()
            .await
            .context("Failed to commit user deletion")
            .map_err(AppError::database)?;

        Ok(())
    }

    /// Loads the participants of a session, ordered by id.
    #[instrument(skip(db))]
    pub async fn find_by_session(db: &SqlitePool, session_id: i64) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.email, u.first_name, u.last_name, u.password, u.admin, u.created_at, u.updated_at
             FROM users u
             JOIN participate p ON p.user_id = u.id
             WHERE p.session_id = $1
             ORDER BY u.id",
        )
        .bind(session_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch session participants")
        .map_err(AppError::database)
    }
}
