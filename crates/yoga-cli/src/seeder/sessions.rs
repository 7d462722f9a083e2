//! Session and participation seeding.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::en::*;
use rayon::prelude::*;
use sqlx::SqlitePool;
use std::time::Instant;

use super::models::SessionSeed;

/// Generates sessions spread over the next two months, each taught by one of
/// `teacher_ids` and attended by up to `max_participants` of `user_ids`.
pub fn generate_sessions(
    count: usize,
    teacher_ids: &[i64],
    user_ids: &[i64],
    max_participants: usize,
) -> Vec<SessionSeed> {
    if teacher_ids.is_empty() {
        return Vec::new();
    }

    (0..count)
        .into_par_iter()
        .map(|_| {
            let words: Vec<String> = Words(2..4).fake();
            let mut name = words.join(" ");
            if let Some(first) = name.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            name.truncate(50);

            let mut description: String = Paragraph(1..3).fake();
            description.truncate(2500);

            let date = Utc::now()
                + Duration::days((1..60).fake::<i64>())
                + Duration::hours((0..12).fake::<i64>());

            let teacher_id = teacher_ids[(0..teacher_ids.len()).fake::<usize>()];

            SessionSeed {
                name,
                description,
                date,
                teacher_id,
                participant_ids: pick_participants(user_ids, max_participants),
            }
        })
        .collect()
}

fn pick_participants(user_ids: &[i64], max_participants: usize) -> Vec<i64> {
    if user_ids.is_empty() || max_participants == 0 {
        return Vec::new();
    }

    let wanted = (0..max_participants.min(user_ids.len()) + 1).fake::<usize>();
    let mut picked: Vec<i64> = (0..wanted)
        .map(|_| user_ids[(0..user_ids.len()).fake::<usize>()])
        .collect();
    picked.sort_unstable();
    picked.dedup();
    picked
}

pub async fn seed_sessions(
    db: &SqlitePool,
    sessions: &[SessionSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📅 Seeding {} sessions...", sessions.len());

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(sessions.len());
    let mut participations = 0;

    for session in sessions {
        let session_id: i64 = sqlx::query_scalar(
            "INSERT INTO sessions (name, description, date, teacher_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&session.name)
        .bind(&session.description)
        .bind(session.date)
        .bind(session.teacher_id)
        .fetch_one(&mut *tx)
        .await?;

        for user_id in &session.participant_ids {
            sqlx::query("INSERT INTO participate (session_id, user_id) VALUES ($1, $2)")
                .bind(session_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            participations += 1;
        }

        ids.push(session_id);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} sessions with {} participations in {:?}",
        ids.len(),
        participations,
        start_time.elapsed()
    );

    Ok(ids)
}

/// Deletes every session; participation rows go with them.
pub async fn clear_sessions(db: &SqlitePool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing sessions...");

    let result = sqlx::query("DELETE FROM sessions")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} sessions in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sessions_respects_bounds() {
        let teachers = [1, 2];
        let users: Vec<i64> = (10..30).collect();

        let sessions = generate_sessions(25, &teachers, &users, 5);

        assert_eq!(sessions.len(), 25);
        for session in &sessions {
            assert!(teachers.contains(&session.teacher_id));
            assert!(session.name.len() <= 50);
            assert!(!session.description.is_empty());
            assert!(session.date > Utc::now());
            assert!(session.participant_ids.len() <= 5);

            let mut unique = session.participant_ids.clone();
            unique.dedup();
            assert_eq!(unique, session.participant_ids);
        }
    }

    #[test]
    fn test_generate_sessions_without_teachers_is_empty() {
        assert!(generate_sessions(3, &[], &[1, 2], 2).is_empty());
    }
}
