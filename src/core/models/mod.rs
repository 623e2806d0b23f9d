pub mod dto;
pub mod user;

pub use dto::{AccountResponse, LoginDto, UserDto, UserView};
pub use user::{Role, User};
