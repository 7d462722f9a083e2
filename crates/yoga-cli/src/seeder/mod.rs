//! Fake data for local development.
//!
//! [`seed_all`] creates teachers, members and sessions (with participants
//! drawn from the new members). [`clear_all`] removes them again while
//! keeping admin accounts and real registrations.

mod models;
mod sessions;
mod teachers;
mod users;

pub use models::{SEED_EMAIL_DOMAIN, SEED_PASSWORD, SeedConfig, SessionSeed, TeacherSeed, UserSeed};
pub use sessions::{clear_sessions, generate_sessions, seed_sessions};
pub use teachers::{clear_teachers, generate_teachers, seed_teachers};
pub use users::{clear_users, generate_users, insert_users_batch, seed_users};

use sqlx::SqlitePool;
use std::time::Instant;
use yoga_core::hash_password;

/// Totals of one seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub teachers: usize,
    pub users: usize,
    pub sessions: usize,
}

pub async fn seed_all(
    db: &SqlitePool,
    config: SeedConfig,
) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Seeding database with {:?}", config);

    let password_hash = hash_password(SEED_PASSWORD)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let teacher_ids = seed_teachers(db, config.teachers).await?;
    let user_ids = seed_users(db, config.users, &password_hash).await?;

    let sessions = generate_sessions(
        config.sessions,
        &teacher_ids,
        &user_ids,
        config.max_participants,
    );
    if sessions.len() < config.sessions {
        println!("   ⚠ No teachers available, skipping sessions");
    }
    let session_ids = seed_sessions(db, &sessions).await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    println!("   Seeded users log in with password '{}'", SEED_PASSWORD);

    Ok(SeedSummary {
        teachers: teacher_ids.len(),
        users: user_ids.len(),
        sessions: session_ids.len(),
    })
}

/// Removes sessions, teachers and seeded members, in that order.
pub async fn clear_all(db: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    clear_sessions(db).await?;
    clear_teachers(db).await?;
    clear_users(db).await?;

    println!("\n✅ Cleared seeded data in {:?}", start_time.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrator = "yoga_db::MIGRATOR")]
    async fn test_seed_all_inserts_requested_counts(pool: SqlitePool) {
        let summary = seed_all(&pool, SeedConfig::new(2, 6, 4).with_max_participants(3))
            .await
            .unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                teachers: 2,
                users: 6,
                sessions: 4
            }
        );
        assert_eq!(count(&pool, "teachers").await, 2);
        assert_eq!(count(&pool, "users").await, 6);
        assert_eq!(count(&pool, "sessions").await, 4);
        assert!(count(&pool, "participate").await <= 12);
    }

    #[sqlx::test(migrator = "yoga_db::MIGRATOR")]
    async fn test_clear_all_keeps_admins(pool: SqlitePool) {
        crate::admin::create_admin(&pool, "Yoga", "Studio", "yoga@studio.com", "test!1234")
            .await
            .unwrap();
        seed_all(&pool, SeedConfig::new(1, 3, 2)).await.unwrap();

        clear_all(&pool).await.unwrap();

        assert_eq!(count(&pool, "sessions").await, 0);
        assert_eq!(count(&pool, "participate").await, 0);
        assert_eq!(count(&pool, "teachers").await, 0);
        assert_eq!(count(&pool, "users").await, 1);
    }
}
