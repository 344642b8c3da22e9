// src/state/session.rs
use std::sync::Arc;

use uuid::Uuid;

use super::{reduce_cycle, ChartUpdate, DashboardState};
use crate::analysis::Dataset;
use crate::config::Settings;
use crate::input::DashboardEvent;
use crate::view::{project, DashboardView};

/// One viewer's dashboard. Sessions share the dataset but never state.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    dataset: Arc<Dataset>,
    state: DashboardState,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>, page_size: usize) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, "Started dashboard session");
        Self {
            id,
            dataset,
            state: DashboardState::new(page_size),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Runs one interaction cycle and returns what happened to the charts.
    pub fn dispatch(&mut self, events: &[DashboardEvent]) -> ChartUpdate {
        if events.is_empty() {
            return ChartUpdate::NoChange;
        }
        let transition = reduce_cycle(&self.state, events, &self.dataset);
        self.state = transition.state;
        transition.charts
    }

    pub fn view(&self, settings: &Settings) -> DashboardView {
        project(&self.dataset, &self.state, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Record, RecordTable};

    fn shared_dataset() -> Arc<Dataset> {
        let table = RecordTable::from_records(vec![
            Record::new("A", "C1", 5.0),
            Record::new("A", "C2", 5.0),
            Record::new("B", "C1", 7.0),
        ]);
        Arc::new(Dataset::new(table, 10).unwrap())
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let dataset = shared_dataset();
        let mut first = Session::new(Arc::clone(&dataset), 5);
        let second = Session::new(Arc::clone(&dataset), 5);

        first.dispatch(&[DashboardEvent::chart_click("A"), DashboardEvent::ToggleTable]);

        assert_eq!(first.state().selected_part.as_deref(), Some("A"));
        assert_eq!(second.state(), &DashboardState::new(5));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_empty_dispatch_is_no_change() {
        let mut session = Session::new(shared_dataset(), 5);
        assert_eq!(session.dispatch(&[]), ChartUpdate::NoChange);
    }

    #[test]
    fn test_click_then_reset_scenario() {
        let mut session = Session::new(shared_dataset(), 5);
        let settings = Settings::default();

        session.dispatch(&[DashboardEvent::chart_click("A")]);
        let filtered = session.view(&settings);
        assert_eq!(filtered.part_chart.series.len(), 2);
        assert!(filtered.part_chart.series.iter().all(|p| p.category == "A"));
        assert_eq!(filtered.crew_chart.series.len(), 2);

        let update = session.dispatch(&[DashboardEvent::ResetFilters]);
        assert_eq!(update, ChartUpdate::Baseline);
        let baseline = session.view(&settings);
        let bars: Vec<(&str, f64)> = baseline
            .part_chart
            .series
            .iter()
            .map(|p| (p.category.as_str(), p.quantity))
            .collect();
        assert_eq!(bars, vec![("A", 10.0), ("B", 7.0)]);
    }
}
