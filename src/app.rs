// src/app.rs
use std::sync::Arc;

use eframe::egui;

use crate::analysis::Dataset;
use crate::config::Settings;
use crate::input::EventQueue;
use crate::state::{ChartUpdate, Session};
use crate::view::DashboardView;

pub struct ScrapDashboardApp {
    settings: Settings,
    session: Session,
    events: EventQueue,
    view: DashboardView,
}

impl ScrapDashboardApp {
    pub fn new(dataset: Arc<Dataset>, settings: Settings) -> Self {
        let session = Session::new(dataset, settings.page_size);
        let view = session.view(&settings);
        Self {
            settings,
            session,
            events: EventQueue::default(),
            view,
        }
    }

    /// Applies the events raised this frame. Charts are only rebuilt when
    /// the state machine asks for it.
    fn apply_events(&mut self, ctx: &egui::Context) {
        if self.events.is_empty() {
            return;
        }

        let events = self.events.drain();
        let update = self.session.dispatch(&events);
        let fresh = self.session.view(&self.settings);

        match update {
            ChartUpdate::NoChange => self.view.table = fresh.table,
            ChartUpdate::Baseline | ChartUpdate::Filtered { .. } => self.view = fresh,
        }

        ctx.request_repaint();
    }
}

impl eframe::App for ScrapDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let header_frame = egui::Frame::default()
            .fill(crate::ui::header::HEADER_BG)
            .inner_margin(egui::Margin::symmetric(12.0, 6.0));

        egui::TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                crate::ui::header::show_header(ui, &mut self.events);
            });

        let [r, g, b] = self.view.bar_rgb;
        let bar_color = egui::Color32::from_rgb(r, g, b);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("dashboard_scroll")
                .show(ui, |ui| {
                    crate::ui::table::show_records_table(ui, &self.view.table, &mut self.events);
                    ui.add_space(12.0);
                    crate::ui::charts::show_charts(
                        ui,
                        &self.view.part_chart,
                        &self.view.crew_chart,
                        bar_color,
                        &mut self.events,
                    );
                });
        });

        self.apply_events(ctx);
    }
}
