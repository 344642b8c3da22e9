// src/config/mod.rs
pub mod record;
pub mod settings;

// Re-export commonly used types
pub use record::{Record, RecordTable};
pub use settings::{Settings, SettingsError};
