// src/view/table.rs
use crate::analysis::Dataset;
use crate::state::{TablePage, TableVisibility};

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub visible: bool,
    pub page: usize,
    pub page_count: usize,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Slices the raw table to the current page. Rows are only copied when the
/// table is visible.
pub fn table_view(dataset: &Dataset, visibility: TableVisibility, page: TablePage) -> TableView {
    let table = dataset.table();
    let total = table.rows.len();
    let visible = visibility.is_visible();

    let rows = if visible {
        table.rows[page.bounds(total)].to_vec()
    } else {
        Vec::new()
    };

    TableView {
        visible,
        page: page.index,
        page_count: page.page_count(total),
        columns: table.columns.clone(),
        rows,
    }
}
