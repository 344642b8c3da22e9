// src/ui/mod.rs
pub mod charts;
pub mod header;
pub mod table;
