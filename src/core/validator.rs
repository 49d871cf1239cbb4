use crate::utils::error::{DigestError, Result};
use serde_json::Value;

/// Parses raw text into a document, rejecting malformed input and a bare `null`.
pub fn parse_and_validate(text: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(text)?;

    if parsed.is_null() {
        return Err(DigestError::NullDocument);
    }

    Ok(parsed)
}
