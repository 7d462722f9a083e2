//! One-off account creation used by the `create-admin` and
//! `create-teacher` commands.

use chrono::Utc;
use sqlx::SqlitePool;
use yoga_core::hash_password;

/// Inserts a user with the admin flag set.
///
/// Fails without touching the table when the email is already registered.
pub async fn create_admin(
    db: &SqlitePool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<i64, Box<dyn std::error::Error>> {
    let hashed_password =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;
    let now = Utc::now();

    let user_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (first_name, last_name, email, password, admin, created_at, updated_at)
         VALUES ($1, $2, $3, $4, 1, $5, $5)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(&hashed_password)
    .bind(now)
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| "User with this email already exists".into())
}

pub async fn create_teacher(
    db: &SqlitePool,
    first_name: &str,
    last_name: &str,
) -> Result<i64, Box<dyn std::error::Error>> {
    let now = Utc::now();

    let teacher_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO teachers (first_name, last_name, created_at, updated_at)
         VALUES ($1, $2, $3, $3)
         RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(now)
    .fetch_one(db)
    .await?;

    Ok(teacher_id)
}
