pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::auth::jwt::JwtService;
pub use crate::auth::password::BcryptHasher;
pub use crate::core::errors::AccountError;
pub use crate::core::services::AccountService;
pub use crate::infrastructure::storage::in_memory::InMemoryUserStore;

#[cfg(test)]
mod tests;
