// src/ui/header.rs
use eframe::egui;

use crate::input::{DashboardEvent, EventQueue};

pub const HEADER_BG: egui::Color32 = egui::Color32::from_rgb(0x2A, 0x6B, 0xAC);
const HEADER_TEXT: egui::Color32 = egui::Color32::from_rgb(0xC6, 0xC6, 0xC6);

pub fn show_header(ui: &mut egui::Ui, events: &mut EventQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("REGISTROS DE SCRAP B1")
                .size(40.0)
                .monospace()
                .color(HEADER_TEXT),
        );
        ui.add_space(12.0);
    });

    ui.horizontal(|ui| {
        if ui.button("Mostrar Registros").clicked() {
            events.push(DashboardEvent::ToggleTable);
        }
        ui.add_space(12.0);
        if ui.button("Reset Filters").clicked() {
            events.push(DashboardEvent::ResetFilters);
        }
    });
    ui.add_space(6.0);
}
