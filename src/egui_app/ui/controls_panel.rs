//! The controls column: debug overlay on top, value readout at the bottom.

use eframe::egui::{self, FontId, RichText, Ui};

use super::style;
use crate::egui_app::controller::CounterController;

const VALUE_BLOCK_HEIGHT: f32 = 110.0;
const VALUE_FONT_SIZE: f32 = 64.0;
const CAPTION_FONT_SIZE: f32 = 14.0;
const DEBUG_FONT_SIZE: f32 = 11.0;

pub(super) fn render_controls(controller: &CounterController, ui: &mut Ui) {
    let palette = style::palette();

    if controller.ui.config.debug {
        render_debug_block(controller, ui);
    }

    ui.add_space((ui.available_height() - VALUE_BLOCK_HEIGHT).max(0.0));
    ui.label(
        RichText::new("Value")
            .color(palette.secondary)
            .font(FontId::monospace(CAPTION_FONT_SIZE)),
    );
    let value_text = controller
        .selected_value()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "—".to_string());
    ui.label(
        RichText::new(value_text)
            .color(palette.foreground)
            .font(FontId::monospace(VALUE_FONT_SIZE)),
    );
}

fn render_debug_block(controller: &CounterController, ui: &mut Ui) {
    let palette = style::palette();
    let snapshot = controller.ui.debug_snapshot();
    let dump = match serde_json::to_string_pretty(&snapshot) {
        Ok(text) => text,
        Err(error) => format!("debug snapshot unavailable: {error}"),
    };
    egui::Frame::new()
        .fill(palette.surface)
        .stroke(style::block_border())
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.label(
                RichText::new(dump)
                    .color(palette.secondary)
                    .font(FontId::monospace(DEBUG_FONT_SIZE)),
            );
        });
}
