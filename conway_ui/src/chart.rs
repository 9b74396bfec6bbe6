// chart.rs - Plot of recent frame-rate and population samples

use conway::HistoryTracker;
use egui::{Color32, Vec2};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

pub const CHART_WINDOW: usize = 30;

const FPS_COLOR: Color32 = Color32::from_rgb(0, 255, 255);
const POPULATION_COLOR: Color32 = Color32::from_rgb(255, 165, 0);

/// `[index, value]` points for the FPS and population series, oldest first.
pub fn series_points(history: &HistoryTracker) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
    let (rates, populations) = history.recent_window(CHART_WINDOW);
    (
        rates.iter().enumerate().map(|(i, &r)| [i as f64, r as f64]).collect(),
        populations.iter().enumerate().map(|(i, &p)| [i as f64, p as f64]).collect(),
    )
}

/// Both series share one vertical scale, legend in the lower right.
pub fn draw(ui: &mut egui::Ui, history: &HistoryTracker, size: Vec2) {
    let (fps, population) = series_points(history);

    Plot::new("history_plot")
        .width(size.x)
        .height(size.y)
        .legend(Legend::default().position(Corner::RightBottom))
        .show_axes([false, false])
        .show_grid([false, false])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(fps)).color(FPS_COLOR).name("FPS"));
            plot_ui.line(
                Line::new(PlotPoints::from(population))
                    .color(POPULATION_COLOR)
                    .name("Population"),
            );
        });
}
