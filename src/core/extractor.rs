use crate::core::formatter::NESTED_KEY;
use crate::domain::model::{Extraction, FieldSequence};
use crate::utils::error::DigestError;
use serde_json::Value;

/// Collects `field` from every element of a root array, in order.
///
/// An element contributes its own value when it has the field, otherwise the
/// value under its nested `address` object, otherwise nothing. A present value
/// that is not a string stops the walk; the values gathered so far are kept
/// and the failure is returned alongside them.
pub fn extract_field(data: &Value, field: &str) -> Extraction {
    let mut values = FieldSequence::new();

    let Value::Array(items) = data else {
        return Extraction {
            field: field.to_string(),
            values,
            error: None,
        };
    };

    for item in items {
        let Some(found) = lookup(item, field) else {
            continue;
        };

        match found {
            Value::String(text) => values.push(text.clone()),
            other => {
                let error = DigestError::FieldAccess {
                    field: field.to_string(),
                    found: DigestError::json_type_name(other),
                };
                tracing::debug!(
                    "Extraction of '{}' stopped after {} values: {}",
                    field,
                    values.len(),
                    error
                );
                return Extraction {
                    field: field.to_string(),
                    values,
                    error: Some(error),
                };
            }
        }
    }

    tracing::debug!("Extracted {} values for '{}'", values.len(), field);
    Extraction {
        field: field.to_string(),
        values,
        error: None,
    }
}

fn lookup<'a>(item: &'a Value, field: &str) -> Option<&'a Value> {
    let Value::Object(obj) = item else {
        return None;
    };

    if let Some(value) = obj.get(field) {
        return Some(value);
    }

    match obj.get(NESTED_KEY) {
        Some(Value::Object(nested)) => nested.get(field),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!([
            {"name": "Ann", "address": {"city": "X"}},
            {"name": "Bo"},
            {"name": "Ann"}
        ])
    }

    #[test]
    fn test_extracts_top_level_field_in_order() {
        let extraction = extract_field(&sample(), "name");
        assert!(extraction.error.is_none());
        assert_eq!(extraction.values, vec!["Ann", "Bo", "Ann"]);
    }

    #[test]
    fn test_falls_back_to_nested_address() {
        let extraction = extract_field(&sample(), "city");
        assert_eq!(extraction.values, vec!["X"]);
    }

    #[test]
    fn test_top_level_wins_over_nested() {
        let data = json!([{"city": "Top", "address": {"city": "Nested"}}]);
        assert_eq!(extract_field(&data, "city").values, vec!["Top"]);
    }

    #[test]
    fn test_absent_field_yields_empty_sequence() {
        let extraction = extract_field(&sample(), "phone");
        assert!(extraction.values.is_empty());
        assert!(extraction.error.is_none());
    }

    #[test]
    fn test_non_array_root_yields_empty_sequence() {
        for data in [json!({"name": "Ann"}), json!("Ann"), json!(1)] {
            let extraction = extract_field(&data, "name");
            assert!(extraction.values.is_empty());
            assert!(extraction.error.is_none());
        }
    }

    #[test]
    fn test_skips_non_object_elements() {
        let data = json!([1, "name", {"name": "Cy"}, null, ["name"]]);
        assert_eq!(extract_field(&data, "name").values, vec!["Cy"]);
    }

    #[test]
    fn test_non_string_value_halts_with_partial_result() {
        let data = json!([
            {"id": "a"},
            {"id": "b"},
            {"id": 3},
            {"id": "d"}
        ]);

        let extraction = extract_field(&data, "id");

        assert_eq!(extraction.values, vec!["a", "b"]);
        match extraction.error {
            Some(DigestError::FieldAccess { field, found }) => {
                assert_eq!(field, "id");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_null_value_is_a_field_access_error() {
        let data = json!([{"address": {"city": null}}]);
        let extraction = extract_field(&data, "city");
        assert!(extraction.values.is_empty());
        assert!(matches!(
            extraction.error,
            Some(DigestError::FieldAccess { found: "null", .. })
        ));
    }
}
