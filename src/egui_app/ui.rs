//! egui renderer for the application UI.

use eframe::egui::{self, Align2, CursorIcon, Frame, Margin, Vec2};

use crate::egui_app::controller::CounterController;

mod controls_panel;
mod counter_view;
mod input;
mod settings_panel;
pub(crate) mod style;

/// Minimum usable window size for the counter layout.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(480.0, 360.0);

const CONTROLS_COLUMN_WIDTH: f32 = 260.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: CounterController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading the persisted configuration.
    pub fn new() -> Result<Self, String> {
        let controller =
            CounterController::new().map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_central(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let frame = Frame::new()
            .fill(palette.background)
            .inner_margin(Margin::symmetric(24, 40));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // Fail closed: an invalid configuration renders only its
            // diagnostic, and no geometry or input reaches the control.
            if let Some(error) = self.controller.config_error() {
                counter_view::render_diagnostic(ui, &error.to_string());
                return;
            }
            ui.horizontal_top(|ui| {
                let response = counter_view::render_counter(&mut self.controller, ui);
                input::apply_frame_input(&mut self.controller, ctx, &response);

                ui.add_space((ui.available_width() - CONTROLS_COLUMN_WIDTH).max(0.0));
                ui.vertical(|ui| {
                    controls_panel::render_controls(&self.controller, ui);
                });
            });
        });
    }

    fn render_settings_toggle(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("settings_toggle"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .show(ctx, |ui| {
                if ui.button("⚙").clicked() {
                    self.controller.ui.settings_open = !self.controller.ui.settings_open;
                }
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_central(ctx);
        self.render_settings_toggle(ctx);
        settings_panel::render_settings(&mut self.controller, ctx);

        // Reasserted every frame while the mouse channel drags, so the
        // cursor comes back on release or teardown without bookkeeping.
        if self.controller.ui.tracker.is_mouse_down() {
            ctx.output_mut(|o| o.cursor_icon = CursorIcon::None);
        }
    }
}
