use crate::core::validator::parse_and_validate;
use crate::utils::error::Result;
use serde_json::Value;
use std::fmt::Write;

pub const DEFAULT_MAX_ITEMS: usize = 10;
pub const NESTED_KEY: &str = "address";

const RULE: &str = "-----------------------------------";

/// Scalar fields shown for each array item, with their labels.
const ITEM_FIELDS: [(&str, &str); 4] = [
    ("id", "ID"),
    ("name", "Name"),
    ("title", "Title"),
    ("email", "Email"),
];

/// Renders a human-readable summary of a parsed document.
///
/// Arrays print a count header and up to `max_items` item blocks; objects
/// print a pretty dump. Any other root renders nothing.
pub fn format_document(data: &Value, max_items: usize) -> Result<String> {
    let mut out = String::new();

    match data {
        Value::Array(items) => {
            // 寫入 String 不會失敗
            let _ = writeln!(out, "Array with {} elements", items.len());
            let _ = writeln!(out, "{}", RULE);

            for (index, item) in items.iter().take(max_items).enumerate() {
                write_item(&mut out, index + 1, item);
            }
        }
        Value::Object(_) => {
            let _ = writeln!(out, "Single object:");
            let _ = writeln!(out, "{}", serde_json::to_string_pretty(data)?);
        }
        _ => {}
    }

    Ok(out)
}

fn write_item(out: &mut String, position: usize, item: &Value) {
    let _ = writeln!(out, "Item {}:", position);

    for (key, label) in ITEM_FIELDS {
        if let Some(value) = item.get(key) {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
    }

    if let Some(Value::Object(address)) = item.get(NESTED_KEY) {
        let city = address.get("city").unwrap_or(&Value::Null);
        let _ = writeln!(out, "  City: {}", city);
    }

    let _ = writeln!(out);
}

/// Parses and formats raw text, rendering any failure as an inline error line.
pub fn process_json_data(text: &str, max_items: usize) -> String {
    match parse_and_validate(text).and_then(|data| format_document(&data, max_items)) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::debug!("Formatting failed: {}", e);
            format!("Error processing JSON: {}\n", e)
        }
    }
}
