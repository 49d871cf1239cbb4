pub mod extractor;
pub mod formatter;
pub mod pipeline;
pub mod statistics;
pub mod validator;

pub use crate::domain::model::{DigestSummary, Extraction, FetchOutcome, FieldSequence};
pub use crate::domain::ports::{ConfigProvider, Confirm, Fetcher};
pub use crate::utils::error::Result;
