//! Teacher seeding.

use fake::Fake;
use fake::faker::name::en::*;
use rayon::prelude::*;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;

use super::models::TeacherSeed;

pub fn generate_teachers(count: usize) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| TeacherSeed {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
        })
        .collect()
}

pub async fn seed_teachers(
    db: &SqlitePool,
    count: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🧘 Seeding {} teachers...", count);

    let teachers = generate_teachers(count);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(teachers.len());

    // 2 params per teacher
    const BATCH_SIZE: usize = 500;
    for chunk in teachers.chunks(BATCH_SIZE) {
        ids.extend(insert_teachers_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

async fn insert_teachers_chunk(
    tx: &mut Transaction<'_, Sqlite>,
    teachers: &[TeacherSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if teachers.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO teachers (first_name, last_name) VALUES ");
    for i in 0..teachers.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${}, ${})", i * 2 + 1, i * 2 + 2));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for teacher in teachers {
        q = q.bind(&teacher.first_name).bind(&teacher.last_name);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

/// Deletes every teacher. Sessions keep existing with no teacher.
pub async fn clear_teachers(db: &SqlitePool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing teachers...");

    let result = sqlx::query("DELETE FROM teachers")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} teachers in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
