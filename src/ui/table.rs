// src/ui/table.rs
use eframe::egui;

use crate::input::{DashboardEvent, EventQueue};
use crate::view::TableView;

const HEADER_BG: egui::Color32 = egui::Color32::from_rgb(0x21, 0x23, 0x25);
const HEADER_FG: egui::Color32 = egui::Color32::from_rgb(0xBC, 0xBB, 0xBC);

pub fn show_records_table(ui: &mut egui::Ui, table: &TableView, events: &mut EventQueue) {
    if !table.visible {
        return;
    }

    ui.group(|ui| {
        ui.set_width(ui.available_width());

        egui::ScrollArea::both()
            .id_source("records_table_scroll")
            .max_height(300.0)
            .show(ui, |ui| {
                egui::Grid::new("records_table")
                    .striped(true)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for column in &table.columns {
                            egui::Frame::none().fill(HEADER_BG).inner_margin(4.0).show(ui, |ui| {
                                ui.label(egui::RichText::new(column).strong().color(HEADER_FG));
                            });
                        }
                        ui.end_row();

                        for row in &table.rows {
                            for value in row {
                                ui.label(value);
                            }
                            ui.end_row();
                        }
                    });
            });

        ui.horizontal(|ui| {
            if ui.add_enabled(table.page > 0, egui::Button::new("◀")).clicked() {
                events.push(DashboardEvent::PreviousPage);
            }
            ui.label(format!("{} / {}", table.page + 1, table.page_count));
            if ui.add_enabled(table.page + 1 < table.page_count, egui::Button::new("▶")).clicked() {
                events.push(DashboardEvent::NextPage);
            }
        });
    });
}
