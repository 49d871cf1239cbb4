#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, FollowUpMode};

pub const DEFAULT_API_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_FOLLOW_UP_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts?_limit=5";
pub const MAX_TIMEOUT_SECS: u64 = 300;
