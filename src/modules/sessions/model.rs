use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;
use yoga_core::serde::deserialize_date_or_datetime;

use crate::modules::teachers::model::Teacher;
use crate::modules::users::model::User;
use crate::validator::not_blank;

/// A scheduled yoga session with its teacher and participants.
///
/// `id` and the timestamps are `None` until the session is first saved.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Option<i64>,
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher: Option<Teacher>,
    pub users: Vec<User>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_participant(&self, user_id: i64) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }

    pub fn participant_ids(&self) -> Vec<i64> {
        self.users.iter().map(|u| u.id).collect()
    }
}

/// A `sessions` row before its teacher and participants are loaded.
#[derive(Debug, FromRow)]
pub struct SessionRow {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub teacher_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire form of a session. The teacher and participants are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(
        length(max = 50, message = "name must be at most 50 characters"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    #[schema(example = "Morning flow")]
    pub name: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(deserialize_with = "deserialize_date_or_datetime")]
    pub date: DateTime<Utc>,
    #[serde(rename = "teacher_id")]
    #[validate(required(message = "teacher_id is required"))]
    pub teacher_id: Option<i64>,
    #[validate(
        length(max = 2500, message = "description must be at most 2500 characters"),
        custom(function = "not_blank", message = "description must not be blank")
    )]
    pub description: String,
    /// Participant user ids. Left out on update to keep the current list.
    #[serde(default)]
    pub users: Option<Vec<i64>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, description: &str, teacher_id: Option<i64>) -> SessionDto {
        SessionDto {
            id: None,
            name: name.to_string(),
            date: Utc::now(),
            teacher_id,
            description: description.to_string(),
            users: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_valid_dto() {
        assert!(dto("Yin", "Slow and deep", Some(1)).validate().is_ok());
    }

    #[test]
    fn test_blank_name_and_missing_teacher_rejected() {
        let errors = dto("   ", "Slow and deep", None).validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("teacher_id"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn test_overlong_fields_rejected() {
        let errors = dto(&"n".repeat(51), &"d".repeat(2501), Some(1))
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn test_dto_field_names() {
        let parsed: SessionDto = serde_json::from_str(
            r#"{"name":"Yin","date":"2024-03-01T09:00:00Z","teacher_id":2,"description":"Slow"}"#,
        )
        .unwrap();

        assert_eq!(parsed.teacher_id, Some(2));
        assert_eq!(parsed.users, None);
        assert_eq!(parsed.id, None);

        let json = serde_json::to_value(&parsed).unwrap();
        assert!(json.get("teacher_id").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_dto_accepts_plain_date() {
        let parsed: SessionDto = serde_json::from_str(
            r#"{"name":"Yin","date":"2025-04-09","teacher_id":2,"description":"Slow"}"#,
        )
        .unwrap();

        assert_eq!(parsed.date.to_rfc3339(), "2025-04-09T00:00:00+00:00");
    }
}
