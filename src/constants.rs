pub const MIN_AGE: u32 = 0;
pub const MAX_AGE: u32 = 150;

pub const USER_REGISTERED: &str = "User registered successfully";
pub const USER_LOGGED_IN: &str = "User logged in successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_FOUND: &str = "User found";
pub const USER_DELETED: &str = "User deleted successfully";
