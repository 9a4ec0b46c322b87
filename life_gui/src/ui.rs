// ui.rs - egui front end: controls, board and statistics

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_core::patterns;

use crate::app::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut click = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.mode.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.mode.is_running(), egui::Button::new("⏭ Step")).clicked() {
                    self.step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.grid.generation()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. Use Start/Pause to run the simulation.");

            ui.separator();

            // Board
            let (width, height) = (self.grid.width(), self.grid.height());
            let (board_w, board_h) = self.layout.board_size(width, height);
            let (response, painter) = ui.allocate_painter(Vec2::new(board_w, board_h), egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            for (x, y, alive) in self.grid.iter() {
                let (dx, dy) = self.layout.cell_origin(x, y);
                let rect = Rect::from_min_size(
                    origin + Vec2::new(dx, dy),
                    Vec2::splat(self.layout.cell_size),
                );
                let cell_color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - origin;
                    click = self.layout.cell_at(offset.x, offset.y, width, height);
                }
            }

            ui.separator();

            // Statistics
            let live_cells = self.grid.population();
            let area = self.grid.area();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", area - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / area as f32 * 100.0));
            });
        });

        self.tick(Instant::now(), click);

        // Keep frames coming while the simulation runs
        if self.mode.is_running() {
            ctx.request_repaint_after(self.update_interval.min(Duration::from_millis(16)));
        }
    }
}
