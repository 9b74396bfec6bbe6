// ui.rs - Input dispatch, board and panel rendering
//
// One update = handle pending keys, advance at most once if a tick is due,
// draw, then record the tick's measured rate so history lines up with frames.

use eframe::egui;
use egui::{Color32, Key, Rect, Stroke, Vec2};
use std::time::Instant;

use crate::{BOTTOM_PANEL_HEIGHT, CELL_SIZE, GRAPH_HEIGHT, GRAPH_WIDTH, LifeApp, MARGIN, chart};
use conway::patterns::PATTERNS;
use conway::{Cell, SimulationControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Step,
    Clear,
    Randomize,
    Save,
    Load,
    Quit,
}

pub fn command_for(key: Key) -> Option<Command> {
    match key {
        Key::Space  => Some(Command::TogglePause),
        Key::N      => Some(Command::Step),
        Key::C      => Some(Command::Clear),
        Key::R      => Some(Command::Randomize),
        Key::S      => Some(Command::Save),
        Key::L      => Some(Command::Load),
        Key::Escape => Some(Command::Quit),
        _           => None,
    }
}

impl LifeApp {
    fn run_command(&mut self, ctx: &egui::Context, command: Command) {
        match command {
            Command::TogglePause => self.sim.toggle_pause(),
            Command::Step => {
                // Only meaningful while paused; the controller reports misuse.
                if let Err(e) = self.sim.step_once() {
                    log::debug!("{e}");
                }
            }
            Command::Clear => self.sim.clear(),
            Command::Randomize => self.sim.randomize(self.config.density),
            Command::Save => {
                self.status = Some(match self.sim.save(&self.config.pattern_path) {
                    Ok(()) => format!("Saved {} cells", self.sim.population()),
                    Err(e) => {
                        log::error!("{e}");
                        format!("Save failed: {e}")
                    }
                });
            }
            Command::Load => {
                self.status = Some(match self.sim.load(&self.config.pattern_path) {
                    Ok(()) => format!("Loaded {} cells", self.sim.population()),
                    Err(e) => {
                        log::error!("{e}");
                        format!("Load failed: {e}")
                    }
                });
            }
            Command::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let keys: Vec<Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key { key, pressed: true, repeat: false, .. } => Some(*key),
                    _ => None,
                })
                .collect()
        });
        for command in keys.into_iter().filter_map(command_for) {
            self.run_command(ctx, command);
        }
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let bounds = self.sim.bounds();
        let pitch = CELL_SIZE + MARGIN;
        let total_size = Vec2::new(
            bounds.width.max(0) as f32 * pitch,
            bounds.height.max(0) as f32 * pitch,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for cell in bounds.cells() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(cell.x as f32 * pitch, cell.y as f32 * pitch),
                Vec2::splat(CELL_SIZE),
            );
            let color = if self.sim.cells().contains(&cell) {
                self.live_color
            } else {
                self.dead_color
            };
            painter.rect_filled(rect, 0.0, color);
        }

        // Click editing only while paused
        if self.sim.is_paused() && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let cell = Cell::new((offset.x / pitch).floor() as i32, (offset.y / pitch).floor() as i32);
                self.sim.toggle_cell(cell);
            }
        }
    }

    fn draw_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_panel")
            .exact_height(BOTTOM_PANEL_HEIGHT)
            .frame(
                egui::Frame::none()
                    .fill(Color32::from_gray(20))
                    .stroke(Stroke::new(2.0, Color32::WHITE))
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        let state = if self.sim.is_paused() { "paused" } else { "running" };
                        ui.monospace(format!("Gen: {}  ({state})", self.sim.generation()));
                        ui.monospace(format!("Live: {}", self.sim.population()));
                        ui.monospace("Space:Run/Pause  N:Step  C:Clear  R:Random  S:Save  L:Load");

                        ui.horizontal(|ui| {
                            egui::ComboBox::from_id_source("pattern_selector")
                                .selected_text(PATTERNS[self.selected_pattern].name)
                                .show_ui(ui, |ui| {
                                    for (i, pattern) in PATTERNS.iter().enumerate() {
                                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                                    }
                                });
                            if ui.button("Apply Pattern").clicked() {
                                self.sim.apply_pattern(&PATTERNS[self.selected_pattern]);
                            }
                            if let Some(status) = &self.status {
                                ui.label(status.as_str());
                            }
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        chart::draw(ui, self.sim.history(), Vec2::new(GRAPH_WIDTH, GRAPH_HEIGHT));
                    });
                });
            });
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        let measured_rate = if self.clock.is_due(now) {
            self.sim.tick();
            Some(self.clock.tick(now))
        } else {
            None
        };

        self.draw_panel(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| self.draw_board(ui));

        if let Some(rate) = measured_rate {
            self.sim.record_sample(rate);
        }

        ctx.request_repaint_after(self.clock.until_due(Instant::now()));
    }
}
