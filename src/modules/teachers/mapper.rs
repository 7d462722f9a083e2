use chrono::Utc;

use super::model::{Teacher, TeacherDto};

impl From<&Teacher> for TeacherDto {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id,
            last_name: teacher.last_name.clone(),
            first_name: teacher.first_name.clone(),
            created_at: Some(teacher.created_at),
            updated_at: Some(teacher.updated_at),
        }
    }
}

/// Missing timestamps are filled with the current time.
impl From<&TeacherDto> for Teacher {
    fn from(dto: &TeacherDto) -> Self {
        let now = Utc::now();
        Self {
            id: dto.id,
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            created_at: dto.created_at.unwrap_or(now),
            updated_at: dto.updated_at.unwrap_or(now),
        }
    }
}

pub fn to_dto_list(teachers: &[Teacher]) -> Vec<TeacherDto> {
    teachers.iter().map(TeacherDto::from).collect()
}
