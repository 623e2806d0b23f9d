//! Field-for-field conversions between the wire and persisted user shapes.

use chrono::Utc;

use crate::core::errors::AccountError;
use crate::core::models::{User, UserDto, UserView};

impl TryFrom<UserDto> for User {
    type Error = AccountError;

    /// Copies the plaintext password through untouched; hashing is the caller's job.
    fn try_from(dto: UserDto) -> Result<Self, Self::Error> {
        let age = dto.validate_age()?;
        let now = Utc::now();
        Ok(User {
            id: dto.id,
            name: dto.name,
            second_name: dto.second_name,
            email: dto.email,
            age,
            password: dto.password.unwrap_or_default(),
            role: dto.role.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        UserDto {
            id: user.id.clone(),
            name: user.name.clone(),
            second_name: user.second_name.clone(),
            email: user.email.clone(),
            age: i64::from(user.age),
            password: None,
            role: Some(user.role),
        }
    }
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id.clone().unwrap_or_default(),
            name: user.name.clone(),
            second_name: user.second_name.clone(),
            email: user.email.clone(),
            age: user.age,
            role: user.role,
        }
    }
}
