// src/file/mod.rs
pub mod records;

pub use records::{DatasetError, RecordFileHandler};
