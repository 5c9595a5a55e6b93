//! Palette and visuals for the counter UI.

use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Fixed color palette used across the UI.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Window background.
    pub background: Color32,
    /// Raised surfaces (blocks, windows).
    pub surface: Color32,
    /// Ticks, labels, the handle, and primary text.
    pub foreground: Color32,
    /// De-emphasized ticks and captions.
    pub secondary: Color32,
    /// Accent for the selected range when monochrome is off.
    pub primary: Color32,
    /// Borders around blocks and panels.
    pub outline: Color32,
    /// Diagnostic messages.
    pub warning: Color32,
}

/// The application palette.
pub fn palette() -> Palette {
    Palette {
        background: Color32::from_rgb(12, 12, 14),
        surface: Color32::from_rgb(22, 23, 26),
        foreground: Color32::from_rgb(222, 225, 230),
        secondary: Color32::from_rgb(110, 115, 124),
        primary: Color32::from_rgb(240, 146, 90),
        outline: Color32::from_rgb(52, 55, 62),
        warning: Color32::from_rgb(222, 140, 100),
    }
}

/// Apply the palette to egui's widget visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.surface;
    visuals.panel_fill = palette.background;
    visuals.override_text_color = Some(palette.foreground);
    visuals.extreme_bg_color = palette.background;
    visuals.faint_bg_color = palette.surface;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.outline;
    visuals.selection.stroke = Stroke::new(1.0, palette.foreground);
    visuals.widgets.noninteractive.bg_fill = palette.background;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.foreground);
    set_flat(&mut visuals.widgets.inactive, palette);
    set_flat(&mut visuals.widgets.hovered, palette);
    set_flat(&mut visuals.widgets.active, palette);
    set_flat(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.window_shadow = Shadow::NONE;
}

fn set_flat(widget: &mut WidgetVisuals, palette: Palette) {
    widget.corner_radius = CornerRadius::ZERO;
    widget.bg_fill = palette.surface;
    widget.weak_bg_fill = palette.surface;
    widget.bg_stroke = Stroke::new(1.0, palette.outline);
    widget.fg_stroke = Stroke::new(1.0, palette.foreground);
}

/// Border stroke for bordered blocks (debug overlay, diagnostics).
pub fn block_border() -> Stroke {
    Stroke::new(1.0, palette().outline)
}
