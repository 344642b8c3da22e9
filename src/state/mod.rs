// src/state/mod.rs
pub mod reducer;
pub mod session;

pub use reducer::{reduce, reduce_cycle, ChartUpdate, Transition};
pub use session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableVisibility {
    #[default]
    Hidden,
    Visible,
}

impl TableVisibility {
    pub fn toggled(self) -> Self {
        match self {
            TableVisibility::Hidden => TableVisibility::Visible,
            TableVisibility::Visible => TableVisibility::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == TableVisibility::Visible
    }
}

/// Which half of the reset cycle the charts are in. Chart clicks are only
/// honored in `PassThrough`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPhase {
    #[default]
    PassThrough,
    ResetActive,
}

impl FilterPhase {
    pub fn toggled(self) -> Self {
        match self {
            FilterPhase::PassThrough => FilterPhase::ResetActive,
            FilterPhase::ResetActive => FilterPhase::PassThrough,
        }
    }
}

/// What the two charts are currently drawn from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartSource {
    #[default]
    Baseline,
    /// Every record with this part number, as indices into the dataset.
    Part { part_number: String, rows: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePage {
    pub index: usize,
    pub size: usize,
}

impl TablePage {
    pub fn new(size: usize) -> Self {
        Self { index: 0, size: size.max(1) }
    }

    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.size).max(1)
    }

    pub fn next(self, total_rows: usize) -> Self {
        let last = self.page_count(total_rows) - 1;
        Self { index: (self.index + 1).min(last), ..self }
    }

    pub fn previous(self) -> Self {
        Self { index: self.index.saturating_sub(1), ..self }
    }

    /// Row range of this page, clamped to `total_rows`.
    pub fn bounds(&self, total_rows: usize) -> std::ops::Range<usize> {
        let start = (self.index * self.size).min(total_rows);
        let end = (start + self.size).min(total_rows);
        start..end
    }
}

/// Per-session dashboard state. Replaced wholesale by [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub table: TableVisibility,
    pub phase: FilterPhase,
    pub selected_part: Option<String>,
    pub chart: ChartSource,
    pub page: TablePage,
}

impl DashboardState {
    pub fn new(page_size: usize) -> Self {
        Self {
            table: TableVisibility::default(),
            phase: FilterPhase::default(),
            selected_part: None,
            chart: ChartSource::default(),
            page: TablePage::new(page_size),
        }
    }
}
