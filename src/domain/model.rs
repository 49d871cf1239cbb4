use crate::utils::error::DigestError;

/// Result of a single GET. Transport failures are reported as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Body(String),
    HttpStatus(u16),
}

/// Values pulled for one field name, in source order.
pub type FieldSequence = Vec<String>;

#[derive(Debug)]
pub struct Extraction {
    pub field: String,
    pub values: FieldSequence,
    /// Set when a present value could not be read as a string; `values`
    /// then holds what was collected before it.
    pub error: Option<DigestError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub field: String,
    pub values: FieldSequence,
    pub unique: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestSummary {
    pub fields: Vec<FieldReport>,
    pub follow_up_fetched: bool,
}

impl DigestSummary {
    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.iter().find(|report| report.field == name)
    }
}
