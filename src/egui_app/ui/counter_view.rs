//! Paints the vertical counter track: the ruled tick column, the
//! selected-range column, numeric labels, and the drag handle.
//!
//! The hit region for beginning a drag is the whole counter container,
//! matching the reference behavior; the allocated rect doubles as the
//! track geometry reported to the controller.

use eframe::egui::{self, Align2, FontId, Pos2, Sense, Stroke, Ui};

use super::style;
use crate::counter::{CounterConfig, FalloffMode, falloff};
use crate::egui_app::controller::CounterController;

const MAJOR_TICK_WIDTH: f32 = 10.0;
const MINOR_TICK_WIDTH: f32 = 7.0;
const RANGE_TICK_WIDTH: f32 = 4.0;
const COLUMN_GAP: f32 = 12.0;
const HANDLE_WIDTH: f32 = 24.0;
const HANDLE_RADIUS: f32 = 8.0;
const CHEVRON_HALF_WIDTH: f32 = 5.0;
const CHEVRON_RISE: f32 = 5.0;
const CHEVRON_GAP: f32 = 3.0;
const LABEL_FONT_SIZE: f32 = 11.0;
const LABEL_CHAR_WIDTH: f32 = 6.6;
const BARE_GUTTER: f32 = 8.0;

/// Paint the counter and return its response for input handling.
pub(super) fn render_counter(controller: &mut CounterController, ui: &mut Ui) -> egui::Response {
    let config = controller.ui.config.clone();
    let desired = egui::vec2(view_width(&config), ui.available_height());
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

    controller.report_track_rect(rect.height(), rect.bottom());

    let palette = style::palette();
    let selected = controller.ui.tracker.selected_index();
    let active = controller.ui.tracker.is_active();
    let values = controller.ui.sequence.values();
    let len = values.len();
    if len == 0 {
        return response;
    }
    let apply_falloff = active || config.falloff == FalloffMode::Always;
    let steps = (len - 1).max(1) as f32;
    let spacing = rect.height() / steps;

    let painter = ui.painter();
    let gutter = falloff::MAX_OFFSET + label_gutter(&config);
    let tick_right = rect.left() + gutter + MAJOR_TICK_WIDTH;
    let range_left = tick_right + COLUMN_GAP;

    for (index, value) in values.iter().enumerate() {
        let y = rect.bottom() - spacing * index as f32;
        let shift = if apply_falloff {
            falloff::gaussian_offset(selected, index)
        } else {
            0.0
        };

        // Ruled tick column, right-aligned so the falloff pushes ticks
        // away from the track.
        let tick_width = if config.is_major_tick(index) {
            MAJOR_TICK_WIDTH
        } else {
            MINOR_TICK_WIDTH
        };
        let right = tick_right - shift;
        painter.line_segment(
            [Pos2::new(right - tick_width, y), Pos2::new(right, y)],
            Stroke::new(1.0, palette.foreground),
        );

        if config.numbers && config.is_numbered_tick(index) {
            painter.text(
                Pos2::new(right - tick_width - config.numbers_offset, y),
                Align2::RIGHT_CENTER,
                value.to_string(),
                FontId::monospace(LABEL_FONT_SIZE),
                palette.foreground,
            );
        }

        // Selected-range column: values above the selection are dimmed.
        let range_color = if index > selected {
            palette.secondary
        } else if config.monochrome {
            palette.foreground
        } else {
            palette.primary
        };
        let left = range_left - shift;
        painter.line_segment(
            [Pos2::new(left, y), Pos2::new(left + RANGE_TICK_WIDTH, y)],
            Stroke::new(1.0, range_color),
        );
    }

    let handle_center = Pos2::new(
        range_left + RANGE_TICK_WIDTH + COLUMN_GAP + HANDLE_WIDTH / 2.0,
        rect.bottom() - spacing * selected as f32,
    );
    if active {
        painter.circle_filled(handle_center, HANDLE_RADIUS, palette.foreground);
    } else {
        paint_chevrons(painter, handle_center, palette.foreground);
    }

    response
}

/// Render the diagnostic block shown instead of the control when the
/// configuration is invalid.
pub(super) fn render_diagnostic(ui: &mut Ui, message: &str) {
    let palette = style::palette();
    egui::Frame::new()
        .fill(palette.surface)
        .stroke(style::block_border())
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(message)
                    .color(palette.warning)
                    .font(FontId::monospace(13.0)),
            );
        });
}

/// Horizontal space the counter needs: falloff excursion, labels, both
/// tick columns, and the handle.
fn view_width(config: &CounterConfig) -> f32 {
    falloff::MAX_OFFSET
        + label_gutter(config)
        + MAJOR_TICK_WIDTH
        + COLUMN_GAP
        + RANGE_TICK_WIDTH
        + COLUMN_GAP
        + HANDLE_WIDTH
}

/// Space reserved left of the ticks for the numeric labels.
fn label_gutter(config: &CounterConfig) -> f32 {
    if !config.numbers {
        return BARE_GUTTER;
    }
    let digits = config
        .min_value
        .to_string()
        .len()
        .max(config.max_value.to_string().len());
    digits as f32 * LABEL_CHAR_WIDTH + config.numbers_offset
}

fn paint_chevrons(painter: &egui::Painter, center: Pos2, color: egui::Color32) {
    let stroke = Stroke::new(1.5, color);
    let up_tip = Pos2::new(center.x, center.y - CHEVRON_GAP - CHEVRON_RISE);
    let up_base = center.y - CHEVRON_GAP;
    painter.line_segment([Pos2::new(center.x - CHEVRON_HALF_WIDTH, up_base), up_tip], stroke);
    painter.line_segment([up_tip, Pos2::new(center.x + CHEVRON_HALF_WIDTH, up_base)], stroke);

    let down_tip = Pos2::new(center.x, center.y + CHEVRON_GAP + CHEVRON_RISE);
    let down_base = center.y + CHEVRON_GAP;
    painter.line_segment(
        [Pos2::new(center.x - CHEVRON_HALF_WIDTH, down_base), down_tip],
        stroke,
    );
    painter.line_segment(
        [down_tip, Pos2::new(center.x + CHEVRON_HALF_WIDTH, down_base)],
        stroke,
    );
}
