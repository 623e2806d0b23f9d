use crate::core::errors::AccountError;
use crate::core::models::User;
use async_trait::async_trait;

/// Persistence for user records. Implementations must reject a second record
/// with an existing email on both insert and update.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AccountError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, AccountError>;
    /// Inserts when `user.id` is unset (assigning one), otherwise updates in place.
    async fn save(&self, user: User) -> Result<User, AccountError>;
    async fn delete(&self, user: &User) -> Result<(), AccountError>;
}

pub mod in_memory;
