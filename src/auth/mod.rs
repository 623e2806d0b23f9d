pub mod jwt;
pub mod password;

use crate::core::errors::AccountError;

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, AccountError>;
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AccountError>;
}

pub trait TokenIssuer: Send + Sync {
    fn generate_token(&self, subject: &str, role: &str) -> Result<String, AccountError>;
}
