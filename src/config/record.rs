// src/config/record.rs

pub const PART_NUMBER_COLUMN: &str = "Numero de parte";
pub const CREW_COLUMN: &str = "Tripulacion";
pub const QUANTITY_COLUMN: &str = "Cantidad";

pub const REQUIRED_COLUMNS: [&str; 3] = [PART_NUMBER_COLUMN, CREW_COLUMN, QUANTITY_COLUMN];

/// One scrap entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub part_number: String,
    pub crew: String,
    pub quantity: f64,
}

impl Record {
    pub fn new(part_number: impl Into<String>, crew: impl Into<String>, quantity: f64) -> Self {
        Self {
            part_number: part_number.into(),
            crew: crew.into(),
            quantity,
        }
    }
}

/// The loaded CSV: typed records plus every column as raw text for the
/// data table. `rows[i]` is the raw form of `records[i]`.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub records: Vec<Record>,
}

impl RecordTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
impl RecordTable {
    /// Builds a table with only the three required columns.
    pub fn from_records(records: Vec<Record>) -> Self {
        let rows = records
            .iter()
            .map(|r| vec![r.part_number.clone(), r.crew.clone(), r.quantity.to_string()])
            .collect();
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            records,
        }
    }
}
