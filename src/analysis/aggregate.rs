// src/analysis/aggregate.rs

use std::collections::HashMap;
use crate::config::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub key: String,
    pub total_quantity: f64,
}

/// Ranked totals, highest first, at most `top_n` rows.
pub type Summary = Vec<SummaryRow>;

/// Groups `records` by `key_of`, sums quantities, and keeps the `top_n`
/// largest totals. Equal totals keep the order in which their key first
/// appears in `records`.
pub fn summarize<F>(records: &[Record], top_n: usize, key_of: F) -> Summary
where
    F: Fn(&Record) -> &str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut rows: Summary = Vec::new();

    for record in records {
        let key = key_of(record);
        match positions.get(key) {
            Some(&idx) => rows[idx].total_quantity += record.quantity,
            None => {
                positions.insert(key, rows.len());
                rows.push(SummaryRow {
                    key: key.to_string(),
                    total_quantity: record.quantity,
                });
            }
        }
    }

    // sort_by is stable
    rows.sort_by(|a, b| b.total_quantity.total_cmp(&a.total_quantity));
    rows.truncate(top_n);
    rows
}

/// Returns `(PartSummary, CrewSummary)`.
pub fn aggregate(records: &[Record], top_n: usize) -> (Summary, Summary) {
    let parts = summarize(records, top_n, |r| r.part_number.as_str());
    let crews = summarize(records, top_n, |r| r.crew.as_str());
    (parts, crews)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, total: f64) -> SummaryRow {
        SummaryRow { key: key.to_string(), total_quantity: total }
    }

    #[test]
    fn test_part_summary_scenario() {
        let records = vec![
            Record::new("A", "C1", 5.0),
            Record::new("A", "C2", 5.0),
            Record::new("B", "C1", 7.0),
        ];
        let (parts, crews) = aggregate(&records, 10);

        assert_eq!(parts, vec![row("A", 10.0), row("B", 7.0)]);
        assert_eq!(crews, vec![row("C1", 12.0), row("C2", 5.0)]);
    }

    #[test]
    fn test_truncates_to_top_n_sorted_descending() {
        let records: Vec<Record> = (0..15)
            .map(|i| Record::new(format!("P{i}"), "C", i as f64))
            .collect();
        let (parts, crews) = aggregate(&records, 10);

        assert_eq!(parts.len(), 10);
        assert_eq!(parts[0], row("P14", 14.0));
        assert_eq!(parts[9], row("P5", 5.0));
        assert!(parts.windows(2).all(|w| w[0].total_quantity >= w[1].total_quantity));
        assert_eq!(crews, vec![row("C", 105.0)]);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let records = vec![
            Record::new("Z", "C1", 3.0),
            Record::new("M", "C1", 1.0),
            Record::new("A", "C2", 3.0),
            Record::new("M", "C2", 2.0),
            Record::new("Q", "C3", 9.0),
        ];
        let (parts, _) = aggregate(&records, 10);
        let keys: Vec<&str> = parts.iter().map(|r| r.key.as_str()).collect();

        assert_eq!(keys, vec!["Q", "Z", "M", "A"]);
    }

    #[test]
    fn test_tie_at_cutoff_keeps_earliest_key() {
        let records = vec![
            Record::new("first", "C", 1.0),
            Record::new("second", "C", 1.0),
        ];
        let parts = summarize(&records, 1, |r| r.part_number.as_str());
        assert_eq!(parts, vec![row("first", 1.0)]);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            Record::new("A", "C1", 2.0),
            Record::new("B", "C2", 2.0),
            Record::new("A", "C2", 1.5),
        ];
        assert_eq!(aggregate(&records, 10), aggregate(&records, 10));
    }

    #[test]
    fn test_empty_input_gives_empty_summaries() {
        let (parts, crews) = aggregate(&[], 10);
        assert!(parts.is_empty());
        assert!(crews.is_empty());
    }
}
