use crate::utils::error::Result;
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::io::Write;

pub const DEFAULT_TOP_K: usize = 5;
pub const NO_DATA: &str = "No data to display";

const VALUE_COLUMN_WIDTH: usize = 30;

/// Occurrence count per distinct value, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn from_sequence(values: &[String]) -> Self {
        let mut counts = IndexMap::new();
        for value in values {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Pairs sorted by descending count; equal counts stay in first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        // sort_by 是穩定排序
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

pub fn render_statistics(values: &[String], top_k: usize) -> String {
    if values.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let table = FrequencyTable::from_sequence(values);
    let mut out = String::new();

    let _ = writeln!(out, "Total entries: {}", values.len());
    let _ = writeln!(out, "Unique entries: {}", table.distinct());
    let _ = writeln!(out, "\nTop entries:");

    for (value, count) in table.ranked().into_iter().take(top_k) {
        let _ = writeln!(
            out,
            "  {:<width$} (count: {})",
            value,
            count,
            width = VALUE_COLUMN_WIDTH
        );
    }

    out
}

pub fn display_statistics<W: Write>(out: &mut W, values: &[String], top_k: usize) -> Result<()> {
    write!(out, "{}", render_statistics(values, top_k))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_sequence_prints_single_no_data_line() {
        let rendered = render_statistics(&[], DEFAULT_TOP_K);
        assert_eq!(rendered, "No data to display\n");
        assert_eq!(rendered.lines().count(), 1);
    }

    #[test]
    fn test_report_for_names() {
        let rendered = render_statistics(&seq(&["Ann", "Bo", "Ann"]), DEFAULT_TOP_K);

        assert_eq!(
            rendered,
            format!(
                concat!(
                    "Total entries: 3\nUnique entries: 2\n\nTop entries:\n",
                    "  {:<30} (count: 2)\n  {:<30} (count: 1)\n"
                ),
                "Ann", "Bo"
            )
        );
    }

    #[test]
    fn test_value_column_is_padded_to_thirty() {
        let rendered = render_statistics(&seq(&["x"]), DEFAULT_TOP_K);
        let line = rendered.lines().last().unwrap();
        assert_eq!(line, format!("  x{} (count: 1)", " ".repeat(29)));
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let long = "a".repeat(40);
        let rendered = render_statistics(&[long.clone()], DEFAULT_TOP_K);
        assert!(rendered.contains(&format!("  {} (count: 1)", long)));
    }

    #[test]
    fn test_only_top_k_rows_are_listed() {
        let values = seq(&["a", "b", "c", "d", "e", "f", "g", "a"]);
        let rendered = render_statistics(&values, DEFAULT_TOP_K);

        assert!(rendered.contains("Unique entries: 7\n"));
        let rows = rendered.lines().filter(|l| l.contains("(count: ")).count();
        assert_eq!(rows, 5);
        assert!(rendered.lines().nth(4).unwrap().starts_with("  a "));
    }

    #[test]
    fn test_display_statistics_writes_report() {
        let mut out = Vec::new();
        display_statistics(&mut out, &seq(&["Ann", "Bo", "Ann"]), DEFAULT_TOP_K).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            render_statistics(&seq(&["Ann", "Bo", "Ann"]), DEFAULT_TOP_K)
        );

        let mut empty = Vec::new();
        display_statistics(&mut empty, &[], DEFAULT_TOP_K).unwrap();
        assert_eq!(String::from_utf8(empty).unwrap(), "No data to display\n");
    }

    #[test]
    fn test_counts_sum_to_sequence_length() {
        let values = seq(&["x", "y", "x", "z", "x", "y"]);
        let table = FrequencyTable::from_sequence(&values);

        assert_eq!(table.total(), values.len());
        assert_eq!(table.distinct(), 3);
        assert_eq!(table.ranked()[0], ("x", 3));
    }

    #[test]
    fn test_ranked_is_descending_with_first_seen_ties() {
        let values = seq(&["b", "a", "c", "a", "c", "d"]);
        let table = FrequencyTable::from_sequence(&values);

        assert_eq!(
            table.ranked(),
            vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]
        );
    }
}
