pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, FollowUpMode};

pub use adapters::{console::ConsoleConfirm, console::FixedConfirm, http::HttpFetcher};
pub use crate::core::pipeline::DigestPipeline;
pub use utils::error::{DigestError, Result};
