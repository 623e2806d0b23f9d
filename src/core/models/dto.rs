use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{MAX_AGE, MIN_AGE};
use crate::core::errors::{AccountError, FieldError};
use crate::core::models::user::Role;

/// Wire shape of a user. `password` is accepted on input and never written back out.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub second_name: String,
    pub email: String,
    pub age: i64,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserDto {
    pub fn validate_age(&self) -> Result<u32, AccountError> {
        u32::try_from(self.age)
            .ok()
            .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
            .ok_or_else(|| {
                AccountError::ValidationError(FieldError::new(
                    "age",
                    "Invalid age",
                    format!("Age must be between {} and {}, got {}", MIN_AGE, MAX_AGE, self.age),
                ))
            })
    }

    /// Plaintext password if one was supplied and is not empty.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Reduced projection of a user, safe to hand to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub second_name: String,
    pub email: String,
    pub age: u32,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}
