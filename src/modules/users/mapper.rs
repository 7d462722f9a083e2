use super::model::{User, UserDto};

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            last_name: user.last_name.clone(),
            first_name: user.first_name.clone(),
            admin: user.admin,
            created_at: Some(user.created_at),
            updated_at: Some(user.updated_at),
        }
    }
}

pub fn to_dto_list(users: &[User]) -> Vec<UserDto> {
    users.iter().map(UserDto::from).collect()
}
