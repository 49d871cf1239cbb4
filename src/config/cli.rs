use crate::adapters::http::DEFAULT_TIMEOUT_SECS;
use crate::config::{DEFAULT_API_ENDPOINT, DEFAULT_FOLLOW_UP_ENDPOINT, MAX_TIMEOUT_SECS};
use crate::core::formatter::DEFAULT_MAX_ITEMS;
use crate::core::statistics::DEFAULT_TOP_K;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpMode {
    /// Prompt on the console
    Ask,
    Yes,
    No,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "api-digest")]
#[command(about = "Fetch JSON from an API and print field frequency statistics")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_FOLLOW_UP_ENDPOINT)]
    pub follow_up_endpoint: String,

    /// Fields to extract, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = ["name".to_string(), "email".to_string(), "city".to_string()]
    )]
    pub fields: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    pub max_items: usize,

    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    #[arg(long, value_enum, default_value = "ask")]
    pub follow_up: FollowUpMode,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn follow_up_endpoint(&self) -> &str {
        &self.follow_up_endpoint
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn max_items(&self) -> usize {
        self.max_items
    }

    fn top_k(&self) -> usize {
        self.top_k
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("follow_up_endpoint", &self.follow_up_endpoint)?;
        validate_range("timeout_secs", self.timeout_secs, 1, MAX_TIMEOUT_SECS)?;
        validate_positive_number("max_items", self.max_items, 1)?;
        validate_positive_number("top_k", self.top_k, 1)?;
        for field in &self.fields {
            validate_non_empty_string("fields", field)?;
        }
        Ok(())
    }
}
