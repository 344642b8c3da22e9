// src/input/mod.rs

/// User interactions the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    ToggleTable,
    ResetFilters,
    ChartClick { part_number: String },
    NextPage,
    PreviousPage,
}

impl DashboardEvent {
    pub fn chart_click(part_number: impl Into<String>) -> Self {
        DashboardEvent::ChartClick { part_number: part_number.into() }
    }
}

/// Collects the events raised while drawing one frame so they can be
/// applied together as a single interaction cycle.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<DashboardEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: DashboardEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> Vec<DashboardEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut queue = EventQueue::default();
        queue.push(DashboardEvent::ToggleTable);
        queue.push(DashboardEvent::chart_click("AB12"));

        let events = queue.drain();
        assert_eq!(
            events,
            vec![DashboardEvent::ToggleTable, DashboardEvent::chart_click("AB12")]
        );
        assert!(queue.is_empty());
    }
}
