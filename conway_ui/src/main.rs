// main.rs - Interactive Conway's Game of Life with a performance/population panel

use clap::Parser;
use conway::{SimConfig, Simulation};
use eframe::egui;
use egui::Color32;

mod chart;   // History line chart
mod cli;     // Command-line flags
mod pacing;  // Tick scheduling
mod ui;      // eframe::App impl and key bindings

use pacing::FrameClock;

pub const CELL_SIZE           : f32 = 20.0;
pub const MARGIN              : f32 = 1.0;
pub const BOTTOM_PANEL_HEIGHT : f32 = 120.0;
pub const GRAPH_WIDTH         : f32 = 250.0;
pub const GRAPH_HEIGHT        : f32 = 100.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::from(cli::Args::parse());
    log::info!(
        "starting {}x{} grid at {} fps, patterns in {}",
        config.bounds.width,
        config.bounds.height,
        config.fps,
        config.pattern_path.display()
    );

    let board_w = config.bounds.width.max(0) as f32 * (CELL_SIZE + MARGIN);
    let board_h = config.bounds.height.max(0) as f32 * (CELL_SIZE + MARGIN);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_w.max(640.0) + 16.0, board_h + BOTTOM_PANEL_HEIGHT + 24.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(config))),
    )
}

pub struct LifeApp {
    pub sim              : Simulation,
    pub config           : SimConfig,
    pub clock            : FrameClock,
    pub live_color       : Color32,
    pub dead_color       : Color32,
    pub selected_pattern : usize,
    pub status           : Option<String>, // Last save/load outcome shown in the panel
}

impl LifeApp {
    pub fn new(config: SimConfig) -> Self {
        Self {
            sim: Simulation::from_config(&config),
            clock: FrameClock::new(config.frame_interval()),
            config,
            live_color: Color32::from_rgb(0, 255, 0),
            dead_color: Color32::from_rgb(30, 30, 30),
            selected_pattern: 0,
            status: None,
        }
    }
}
