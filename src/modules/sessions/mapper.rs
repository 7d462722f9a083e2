//! Conversions between [`Session`] and [`SessionDto`].
//!
//! Entity to DTO is a plain `From`. DTO to entity needs the database to
//! resolve the referenced teacher and participants.

use sqlx::SqlitePool;
use yoga_core::AppError;

use crate::modules::teachers::service::TeacherService;
use crate::modules::users::model::User;
use crate::modules::users::service::UserService;

use super::model::{Session, SessionDto};

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            name: session.name.clone(),
            date: session.date,
            teacher_id: session.teacher.as_ref().map(|t| t.id),
            description: session.description.clone(),
            users: Some(session.participant_ids()),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

pub fn to_dto_list(sessions: &[Session]) -> Vec<SessionDto> {
    sessions.iter().map(SessionDto::from).collect()
}

/// Builds an unsaved entity from a DTO.
///
/// Repeated participant ids collapse to one. An id that matches no teacher
/// or user is a bad request.
pub async fn to_entity(db: &SqlitePool, dto: &SessionDto) -> Result<Session, AppError> {
    let teacher = match dto.teacher_id {
        Some(teacher_id) => Some(
            TeacherService::find_by_id(db, teacher_id)
                .await?
                .ok_or_else(|| {
                    AppError::bad_request(format!("Teacher with id {} not found", teacher_id))
                })?,
        ),
        None => None,
    };

    let mut users: Vec<User> = Vec::new();
    for &user_id in dto.users.as_deref().unwrap_or_default() {
        if users.iter().any(|u| u.id == user_id) {
            continue;
        }
        let user = UserService::find_by_id(db, user_id)
            .await?
            .ok_or_else(|| AppError::bad_request(format!("User with id {} not found", user_id)))?;
        users.push(user);
    }

    Ok(Session {
        id: dto.id,
        name: dto.name.clone(),
        date: dto.date,
        description: dto.description.clone(),
        teacher,
        users,
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::teachers::model::Teacher;

    fn user(id: i64) -> User {
        let now = Utc::now();
        User {
            id,
            email: format!("user{}@test.com", id),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            password: "hash".to_string(),
            admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn session(teacher: Option<Teacher>, users: Vec<User>) -> Session {
        let now = Utc::now();
        Session {
            id: Some(3),
            name: "Vinyasa".to_string(),
            date: now,
            description: "Flowing sequence".to_string(),
            teacher,
            users,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    #[test]
    fn test_session_to_dto() {
        let now = Utc::now();
        let teacher = Teacher {
            id: 9,
            first_name: "Hélène".to_string(),
            last_name: "THIERCELIN".to_string(),
            created_at: now,
            updated_at: now,
        };
        let dto = SessionDto::from(&session(Some(teacher), vec![user(1), user(5)]));

        assert_eq!(dto.id, Some(3));
        assert_eq!(dto.teacher_id, Some(9));
        assert_eq!(dto.users, Some(vec![1, 5]));
        assert_eq!(dto.name, "Vinyasa");
    }

    #[test]
    fn test_session_without_teacher_maps_to_null_reference() {
        let dto = SessionDto::from(&session(None, vec![]));

        assert_eq!(dto.teacher_id, None);
        assert_eq!(dto.users, Some(vec![]));

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["teacher_id"].is_null());
    }

    #[test]
    fn test_list_mapping() {
        assert!(to_dto_list(&[]).is_empty());
        assert_eq!(to_dto_list(&[session(None, vec![]), session(None, vec![])]).len(), 2);
    }
}
