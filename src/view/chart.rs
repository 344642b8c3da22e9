// src/view/chart.rs
use crate::analysis::{Dataset, Summary};
use crate::config::record::{CREW_COLUMN, PART_NUMBER_COLUMN, QUANTITY_COLUMN};
use crate::config::Record;

pub const PART_CHART_TITLE: &str = "Top Numero de parte Scrap";
pub const CREW_CHART_TITLE: &str = "Top Scrap por Tripulación";
pub const BAR_WIDTH: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along x, quantities along y.
    Vertical,
    /// Quantities along x, categories along y.
    Horizontal,
}

/// One bar: its category label and its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub category: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    pub title: String,
    pub orientation: Orientation,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub series: Vec<BarPoint>,
}

impl ChartDescriptor {
    /// Category of the bar under `(x, y)` in plot coordinates, or `None`
    /// when the point falls between bars or beyond a bar's end.
    pub fn bar_at(&self, x: f64, y: f64) -> Option<&str> {
        let (along, across) = match self.orientation {
            Orientation::Vertical => (x, y),
            Orientation::Horizontal => (y, x),
        };
        if !along.is_finite() || !across.is_finite() {
            return None;
        }

        let idx = along.round();
        if idx < 0.0 || (along - idx).abs() > BAR_WIDTH / 2.0 {
            return None;
        }
        let bar = self.series.get(idx as usize)?;

        let (low, high) = if bar.quantity >= 0.0 {
            (0.0, bar.quantity)
        } else {
            (bar.quantity, 0.0)
        };
        (low..=high).contains(&across).then_some(bar.category.as_str())
    }
}

fn from_summary(summary: &Summary) -> Vec<BarPoint> {
    summary
        .iter()
        .map(|row| BarPoint {
            category: row.key.clone(),
            quantity: row.total_quantity,
        })
        .collect()
}

fn from_rows<F>(dataset: &Dataset, rows: &[usize], category: F) -> Vec<BarPoint>
where
    F: Fn(&Record) -> &str,
{
    rows.iter()
        .filter_map(|&idx| dataset.records().get(idx))
        .map(|record| BarPoint {
            category: category(record).to_string(),
            quantity: record.quantity,
        })
        .collect()
}

pub fn part_chart(series: Vec<BarPoint>, selected: Option<&str>) -> ChartDescriptor {
    let title = match selected {
        Some(part_number) => format!("{PART_CHART_TITLE}: {part_number}"),
        None => PART_CHART_TITLE.to_string(),
    };
    ChartDescriptor {
        title,
        orientation: Orientation::Vertical,
        x_axis_title: PART_NUMBER_COLUMN,
        y_axis_title: QUANTITY_COLUMN,
        series,
    }
}

pub fn crew_chart(series: Vec<BarPoint>) -> ChartDescriptor {
    ChartDescriptor {
        title: CREW_CHART_TITLE.to_string(),
        orientation: Orientation::Horizontal,
        x_axis_title: QUANTITY_COLUMN,
        y_axis_title: CREW_COLUMN,
        series,
    }
}

pub fn baseline_charts(dataset: &Dataset) -> (ChartDescriptor, ChartDescriptor) {
    (
        part_chart(from_summary(dataset.part_summary()), None),
        crew_chart(from_summary(dataset.crew_summary())),
    )
}

/// One bar per matching record on both charts, in record order.
pub fn filtered_charts(dataset: &Dataset, part_number: &str, rows: &[usize]) -> (ChartDescriptor, ChartDescriptor) {
    (
        part_chart(from_rows(dataset, rows, |r| r.part_number.as_str()), Some(part_number)),
        crew_chart(from_rows(dataset, rows, |r| r.crew.as_str())),
    )
}
