use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of an account; the password digest is never part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUserDto {
    pub user: UserDto,
    pub is_admin: bool,
}

impl From<User> for AuthenticatedUserDto {
    fn from(user: User) -> Self {
        let is_admin = user.role.is_admin();
        Self {
            user: user.into(),
            is_admin,
        }
    }
}
