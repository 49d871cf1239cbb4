use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP Error: {status}")]
    HttpStatus { status: u16 },

    #[error("Failed to fetch data from API: {url}")]
    EmptyResponse { url: String },

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Parsed JSON is null")]
    NullDocument,

    #[error("type must be string, but is {found}")]
    FieldAccess { field: String, found: &'static str },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    System,
}

impl DigestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DigestError::Transport(_)
            | DigestError::HttpStatus { .. }
            | DigestError::EmptyResponse { .. } => ErrorCategory::Network,
            DigestError::Parse(_) | DigestError::NullDocument | DigestError::FieldAccess { .. } => {
                ErrorCategory::Data
            }
            DigestError::InvalidConfigValue { .. } => ErrorCategory::Config,
            DigestError::Io(_) => ErrorCategory::System,
        }
    }

    /// 所有傳到頂層的錯誤都以 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DigestError::EmptyResponse { .. } => "Failed to fetch data from API".to_string(),
            DigestError::FieldAccess { field, .. } => {
                format!("Error extracting field '{}': {}", field, self)
            }
            DigestError::InvalidConfigValue { .. } => format!("Configuration error: {}", self),
            other => format!("Error: {}", other),
        }
    }

    /// JSON 型別名稱，對應 FieldAccess 的 `found`
    pub fn json_type_name(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_document_message() {
        assert_eq!(DigestError::NullDocument.to_string(), "Parsed JSON is null");
        assert_eq!(
            DigestError::NullDocument.user_friendly_message(),
            "Error: Parsed JSON is null"
        );
    }

    #[test]
    fn test_parse_error_keeps_diagnostic() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let diagnostic = source.to_string();
        let err = DigestError::from(source);

        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.to_string().starts_with("JSON parsing error: "));
        assert!(err.to_string().ends_with(&diagnostic));
    }

    #[test]
    fn test_field_access_message() {
        let err = DigestError::FieldAccess {
            field: "name".to_string(),
            found: "number",
        };
        assert_eq!(
            err.user_friendly_message(),
            "Error extracting field 'name': type must be string, but is number"
        );
    }

    #[test]
    fn test_categories_and_exit_codes() {
        let status = DigestError::HttpStatus { status: 404 };
        assert_eq!(status.category(), ErrorCategory::Network);
        assert_eq!(status.to_string(), "HTTP Error: 404");

        let empty = DigestError::EmptyResponse {
            url: "http://example.com".to_string(),
        };
        assert_eq!(empty.exit_code(), 1);
        assert_eq!(empty.user_friendly_message(), "Failed to fetch data from API");
    }
}
