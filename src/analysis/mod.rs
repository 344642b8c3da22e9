// src/analysis/mod.rs
pub mod aggregate;

pub use aggregate::{aggregate, Summary, SummaryRow};

use crate::config::{Record, RecordTable};
use crate::file::DatasetError;

/// The loaded records plus the baseline summaries, computed once.
/// Never mutated after construction.
#[derive(Debug)]
pub struct Dataset {
    table: RecordTable,
    part_summary: Summary,
    crew_summary: Summary,
}

impl Dataset {
    pub fn new(table: RecordTable, top_n: usize) -> Result<Self, DatasetError> {
        if table.is_empty() {
            return Err(DatasetError::Empty);
        }

        let (part_summary, crew_summary) = aggregate(&table.records, top_n);
        tracing::debug!(
            records = table.len(),
            parts = part_summary.len(),
            crews = crew_summary.len(),
            top_n,
            "Computed baseline summaries"
        );

        Ok(Self {
            table,
            part_summary,
            crew_summary,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.table.records
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn part_summary(&self) -> &Summary {
        &self.part_summary
    }

    pub fn crew_summary(&self) -> &Summary {
        &self.crew_summary
    }

    /// Indices of every record whose part number equals `part_number`
    /// exactly, in load order.
    pub fn rows_for_part(&self, part_number: &str) -> Vec<usize> {
        self.table
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.part_number == part_number)
            .map(|(idx, _)| idx)
            .collect()
    }
}
