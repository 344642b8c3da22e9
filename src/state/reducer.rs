// src/state/reducer.rs
use tracing::{debug, warn};

use super::{ChartSource, DashboardState, FilterPhase};
use crate::analysis::Dataset;
use crate::input::DashboardEvent;

/// What the renderer has to do with the two charts after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartUpdate {
    /// Keep whatever is on screen.
    NoChange,
    Baseline,
    Filtered { part_number: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DashboardState,
    pub charts: ChartUpdate,
}

pub fn reduce(state: &DashboardState, event: &DashboardEvent, dataset: &Dataset) -> Transition {
    let mut next = state.clone();

    let charts = match event {
        DashboardEvent::ToggleTable => {
            next.table = state.table.toggled();
            ChartUpdate::NoChange
        }
        DashboardEvent::ResetFilters => {
            next.phase = state.phase.toggled();
            match next.phase {
                FilterPhase::ResetActive => {
                    next.selected_part = None;
                    next.chart = ChartSource::Baseline;
                    ChartUpdate::Baseline
                }
                // Back to pass-through with no click yet: the baseline set
                // by the reset stays on screen.
                FilterPhase::PassThrough => ChartUpdate::NoChange,
            }
        }
        DashboardEvent::ChartClick { part_number } => match state.phase {
            FilterPhase::ResetActive => {
                warn!(part_number = %part_number, "Chart click ignored while filters are reset");
                ChartUpdate::Baseline
            }
            FilterPhase::PassThrough => {
                let rows = dataset.rows_for_part(part_number);
                next.selected_part = if rows.is_empty() {
                    None
                } else {
                    Some(part_number.clone())
                };
                next.chart = ChartSource::Part {
                    part_number: part_number.clone(),
                    rows,
                };
                ChartUpdate::Filtered { part_number: part_number.clone() }
            }
        },
        DashboardEvent::NextPage => {
            next.page = state.page.next(dataset.table().rows.len());
            ChartUpdate::NoChange
        }
        DashboardEvent::PreviousPage => {
            next.page = state.page.previous();
            ChartUpdate::NoChange
        }
    };

    debug!(?event, ?charts, phase = ?next.phase, table = ?next.table, "Applied dashboard event");

    Transition { state: next, charts }
}

/// Applies every event of one interaction cycle in order. A reset in the
/// cycle drops the cycle's chart clicks.
pub fn reduce_cycle(state: &DashboardState, events: &[DashboardEvent], dataset: &Dataset) -> Transition {
    let reset_pressed = events.iter().any(|e| matches!(e, DashboardEvent::ResetFilters));

    let mut current = Transition {
        state: state.clone(),
        charts: ChartUpdate::NoChange,
    };

    for event in events {
        if reset_pressed && matches!(event, DashboardEvent::ChartClick { .. }) {
            debug!(?event, "Dropping chart click, reset pressed in the same cycle");
            continue;
        }
        let step = reduce(&current.state, event, dataset);
        current.state = step.state;
        if step.charts != ChartUpdate::NoChange {
            current.charts = step.charts;
        }
    }

    current
}
