// src/ui/charts.rs
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::input::{DashboardEvent, EventQueue};
use crate::view::chart::BAR_WIDTH;
use crate::view::{ChartDescriptor, Orientation};

const CHART_HEIGHT: f32 = 380.0;

fn bar_chart(chart: &ChartDescriptor, color: egui::Color32) -> BarChart {
    let bars: Vec<Bar> = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            Bar::new(i as f64, point.quantity)
                .name(&point.category)
                .width(BAR_WIDTH)
                .fill(color)
        })
        .collect();

    let bar_chart = BarChart::new(bars).color(color).name(&chart.title);
    match chart.orientation {
        Orientation::Vertical => bar_chart,
        Orientation::Horizontal => bar_chart.horizontal(),
    }
}

/// Draws one chart and returns the plot coordinate under the pointer when
/// the plot was clicked.
fn draw_chart(ui: &mut egui::Ui, id: &str, chart: &ChartDescriptor, color: egui::Color32) -> Option<PlotPoint> {
    ui.vertical_centered(|ui| {
        ui.heading(&chart.title);
    });

    if chart.series.is_empty() {
        ui.label("No records for this selection");
    }

    let plot = Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_label(chart.x_axis_title)
        .y_axis_label(chart.y_axis_title);

    let response = plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(bar_chart(chart, color));

        // Category labels next to each bar
        for (i, point) in chart.series.iter().enumerate() {
            let (position, anchor) = match chart.orientation {
                Orientation::Vertical => (PlotPoint::new(i as f64, 0.0), egui::Align2::CENTER_TOP),
                Orientation::Horizontal => (PlotPoint::new(0.0, i as f64), egui::Align2::RIGHT_CENTER),
            };
            plot_ui.text(Text::new(position, point.category.clone()).anchor(anchor));
        }

        plot_ui.pointer_coordinate()
    });

    if response.response.clicked() {
        response.inner
    } else {
        None
    }
}

pub fn show_charts(ui: &mut egui::Ui, part_chart: &ChartDescriptor, crew_chart: &ChartDescriptor, color: egui::Color32, events: &mut EventQueue) {
    ui.columns(2, |columns| {
        let clicked = draw_chart(&mut columns[0], "part_number_chart", part_chart, color);
        if let Some(point) = clicked {
            if let Some(category) = part_chart.bar_at(point.x, point.y) {
                events.push(DashboardEvent::chart_click(category));
            }
        }

        // Only the part number chart drives filtering
        draw_chart(&mut columns[1], "crew_chart", crew_chart, color);
    });
}
