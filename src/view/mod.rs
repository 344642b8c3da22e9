// src/view/mod.rs
pub mod chart;
pub mod table;

pub use chart::{BarPoint, ChartDescriptor, Orientation};
pub use table::TableView;

use crate::analysis::Dataset;
use crate::config::Settings;
use crate::state::{ChartSource, DashboardState};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub part_chart: ChartDescriptor,
    pub crew_chart: ChartDescriptor,
    pub table: TableView,
    pub bar_rgb: [u8; 3],
}

pub fn project(dataset: &Dataset, state: &DashboardState, settings: &Settings) -> DashboardView {
    let (part_chart, crew_chart) = match &state.chart {
        ChartSource::Baseline => chart::baseline_charts(dataset),
        ChartSource::Part { part_number, rows } => chart::filtered_charts(dataset, part_number, rows),
    };

    DashboardView {
        part_chart,
        crew_chart,
        table: table::table_view(dataset, state.table, state.page),
        bar_rgb: settings.bar_rgb(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Record, RecordTable};
    use crate::input::DashboardEvent;
    use crate::state::reduce;

    fn dataset() -> Dataset {
        let table = RecordTable::from_records(vec![
            Record::new("A", "C1", 5.0),
            Record::new("B", "C2", 7.0),
            Record::new("A", "C3", 5.0),
            Record::new("C", "C2", 1.0),
            Record::new("D", "C1", 2.0),
            Record::new("E", "C1", 3.0),
        ]);
        Dataset::new(table, 10).unwrap()
    }

    #[test]
    fn test_baseline_projection() {
        let data = dataset();
        let view = project(&data, &DashboardState::new(5), &Settings::default());

        assert_eq!(view.part_chart.title, "Top Numero de parte Scrap");
        assert_eq!(view.part_chart.orientation, Orientation::Vertical);
        assert_eq!(view.part_chart.x_axis_title, "Numero de parte");
        assert_eq!(view.part_chart.y_axis_title, "Cantidad");
        assert_eq!(view.part_chart.series[0], BarPoint { category: "A".into(), quantity: 10.0 });

        assert_eq!(view.crew_chart.title, "Top Scrap por Tripulación");
        assert_eq!(view.crew_chart.orientation, Orientation::Horizontal);
        assert_eq!(view.crew_chart.x_axis_title, "Cantidad");
        assert_eq!(view.crew_chart.y_axis_title, "Tripulacion");
        assert_eq!(view.crew_chart.series[0], BarPoint { category: "C1".into(), quantity: 10.0 });

        assert!(!view.table.visible);
        assert!(view.table.rows.is_empty());
    }

    #[test]
    fn test_filtered_projection_is_unaggregated() {
        let data = dataset();
        let state = reduce(&DashboardState::new(5), &DashboardEvent::chart_click("A"), &data).state;
        let view = project(&data, &state, &Settings::default());

        assert_eq!(view.part_chart.title, "Top Numero de parte Scrap: A");
        assert_eq!(view.crew_chart.title, "Top Scrap por Tripulación");
        assert_eq!(
            view.part_chart.series,
            vec![
                BarPoint { category: "A".into(), quantity: 5.0 },
                BarPoint { category: "A".into(), quantity: 5.0 },
            ]
        );
        assert_eq!(
            view.crew_chart.series,
            vec![
                BarPoint { category: "C1".into(), quantity: 5.0 },
                BarPoint { category: "C3".into(), quantity: 5.0 },
            ]
        );
    }

    #[test]
    fn test_unknown_part_projects_empty_series() {
        let data = dataset();
        let state = reduce(&DashboardState::new(5), &DashboardEvent::chart_click("Z"), &data).state;
        let view = project(&data, &state, &Settings::default());

        assert_eq!(view.part_chart.title, "Top Numero de parte Scrap: Z");
        assert!(view.part_chart.series.is_empty());
        assert!(view.crew_chart.series.is_empty());
    }

    #[test]
    fn test_visible_table_is_paged() {
        let data = dataset();
        let mut state = reduce(&DashboardState::new(5), &DashboardEvent::ToggleTable, &data).state;

        let first = project(&data, &state, &Settings::default()).table;
        assert!(first.visible);
        assert_eq!(first.page_count, 2);
        assert_eq!(first.rows.len(), 5);
        assert_eq!(first.columns, vec!["Numero de parte", "Tripulacion", "Cantidad"]);

        state = reduce(&state, &DashboardEvent::NextPage, &data).state;
        let second = project(&data, &state, &Settings::default()).table;
        assert_eq!(second.page, 1);
        assert_eq!(second.rows, vec![vec!["E".to_string(), "C1".to_string(), "3".to_string()]]);
    }

    #[test]
    fn test_bar_at_requires_a_bar_hit() {
        let data = dataset();
        let view = project(&data, &DashboardState::new(5), &Settings::default());
        let parts = &view.part_chart;

        // A = 10 at x 0, B = 7 at x 1
        assert_eq!(parts.bar_at(0.1, 4.0), Some("A"));
        assert_eq!(parts.bar_at(1.2, 7.0), Some("B"));
        assert_eq!(parts.bar_at(1.0, 8.5), None);
        assert_eq!(parts.bar_at(0.0, -1.0), None);
        assert_eq!(parts.bar_at(0.5, 2.0), None);
        assert_eq!(parts.bar_at(12.0, 1.0), None);

        // Crew bars run along x: C1 = 10 at y 0
        let crews = &view.crew_chart;
        assert_eq!(crews.bar_at(9.0, 0.0), Some("C1"));
        assert_eq!(crews.bar_at(11.0, 0.0), None);
    }
}
