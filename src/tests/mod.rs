
use crate::auth::jwt::JwtService;
use crate::auth::password::BcryptHasher;
use crate::core::models::UserDto;
use crate::core::services::AccountService;
use crate::infrastructure::storage::in_memory::InMemoryUserStore;

pub const TEST_SECRET: &str = "test-secret";

pub type TestService = AccountService<InMemoryUserStore, BcryptHasher, JwtService>;

/// Returns the service plus a handle onto the same store for inspection.
pub fn create_test_service() -> (TestService, InMemoryUserStore) {
    let _ = env_logger::try_init();
    let storage = InMemoryUserStore::new();
    let service = AccountService::new(
        storage.clone(),
        BcryptHasher::new(4),
        JwtService::new(TEST_SECRET, 3600),
    );
    (service, storage)
}

pub fn user_dto(email: &str, password: &str, age: i64) -> UserDto {
    UserDto {
        name: "A".to_string(),
        second_name: "B".to_string(),
        email: email.to_string(),
        age,
        password: Some(password.to_string()),
        ..Default::default()
    }
}
