// src/file/records.rs
use std::path::{Path, PathBuf};

use crate::config::record::REQUIRED_COLUMNS;
use crate::config::{Record, RecordTable};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {source}")]
    Open { path: PathBuf, source: csv::Error },
    #[error("Failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Dataset is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("Invalid quantity {value:?} on line {line}")]
    InvalidQuantity { line: u64, value: String },
    #[error("Dataset has no records")]
    Empty,
}

#[derive(Debug)]
pub struct RecordFileHandler;

impl RecordFileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<RecordTable, DatasetError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|source| DatasetError::Open { path: path.to_path_buf(), source })?;
        read_table(reader)
    }
}

/// Parses a CSV source into a [`RecordTable`], validating the required
/// columns and every quantity.
pub fn read_table<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<RecordTable, DatasetError> {
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column_index = |name: &'static str| {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or(DatasetError::MissingColumn(name))
    };
    let [part_idx, crew_idx, qty_idx] = [
        column_index(REQUIRED_COLUMNS[0])?,
        column_index(REQUIRED_COLUMNS[1])?,
        column_index(REQUIRED_COLUMNS[2])?,
    ];

    let mut rows = Vec::new();
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| row.get(idx).unwrap_or("");

        let raw_qty = field(qty_idx);
        let quantity = raw_qty
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or_else(|| DatasetError::InvalidQuantity { line, value: raw_qty.to_string() })?;

        records.push(Record::new(field(part_idx), field(crew_idx), quantity));
        rows.push(row.iter().map(|v| v.to_string()).collect());
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }

    tracing::info!(records = records.len(), columns = columns.len(), "Loaded scrap dataset");

    Ok(RecordTable { columns, rows, records })
}
