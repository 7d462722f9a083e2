//! Seed records and seeding configuration.

use chrono::{DateTime, Utc};

/// Shared password of every seeded user.
pub const SEED_PASSWORD: &str = "password123";

/// Domain of every seeded user's email, used to find them again on clear.
pub const SEED_EMAIL_DOMAIN: &str = "example.com";

pub struct TeacherSeed {
    pub first_name: String,
    pub last_name: String,
}

pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

pub struct SessionSeed {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub teacher_id: i64,
    pub participant_ids: Vec<i64>,
}

/// How much fake data a `seed` run creates.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub teachers: usize,
    pub users: usize,
    pub sessions: usize,
    /// Upper bound on participants drawn for each session
    pub max_participants: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teachers: 5,
            users: 40,
            sessions: 12,
            max_participants: 8,
        }
    }
}

impl SeedConfig {
    pub fn new(teachers: usize, users: usize, sessions: usize) -> Self {
        Self {
            teachers,
            users,
            sessions,
            ..Default::default()
        }
    }

    pub fn with_max_participants(mut self, max_participants: usize) -> Self {
        self.max_participants = max_participants;
        self
    }
}
