//! Application-wide constants

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 86_400;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;

pub const MIN_NAME_LENGTH: u64 = 2;
pub const MAX_NAME_LENGTH: u64 = 100;

pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 5;
pub const DEFAULT_PRIORITY: i32 = 3;

/// Board columns, also the default categories of every new project.
pub const BUCKET_TO_DO: &str = "To Do";
pub const BUCKET_IN_PROGRESS: &str = "In Progress";
pub const BUCKET_HOT_FIX: &str = "Hot Fix";
pub const BUCKET_DONE: &str = "Done";

pub const DEFAULT_CATEGORIES: [&str; 4] = [BUCKET_TO_DO, BUCKET_IN_PROGRESS, BUCKET_HOT_FIX, BUCKET_DONE];
