//! The settings window: live edits of the configuration, applied
//! wholesale through the controller so every change revalidates, re-derives
//! the value sequence, re-clamps the selection, and persists.

use eframe::egui::{self, ComboBox, DragValue, Ui};

use crate::counter::FalloffMode;
use crate::egui_app::controller::CounterController;

pub(super) fn render_settings(controller: &mut CounterController, ctx: &egui::Context) {
    let mut open = controller.ui.settings_open;
    let mut draft = controller.ui.config.clone();
    let mut changed = false;

    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            changed |= ui.checkbox(&mut draft.debug, "Debug overlay").changed();
            changed |= ui.checkbox(&mut draft.monochrome, "Monochrome").changed();
            changed |= ui.checkbox(&mut draft.numbers, "Numbers").changed();
            changed |= ui.checkbox(&mut draft.wheel, "Wheel stepping").changed();

            ui.separator();
            changed |= numeric_row(ui, "Min value", &mut draft.min_value);
            changed |= numeric_row(ui, "Max value", &mut draft.max_value);
            changed |= numeric_row(ui, "Step", &mut draft.step);
            changed |= numeric_row(ui, "Major division", &mut draft.major_division);
            changed |= numeric_row(ui, "Numbered division", &mut draft.numbered_division);
            changed |= ui
                .horizontal(|ui| {
                    ui.label("Numbers offset");
                    ui.add(DragValue::new(&mut draft.numbers_offset).speed(0.5))
                        .changed()
                })
                .inner;

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Falloff");
                ComboBox::from_id_salt("falloff_mode")
                    .selected_text(falloff_label(draft.falloff))
                    .show_ui(ui, |ui| {
                        for mode in [FalloffMode::WhileActive, FalloffMode::Always] {
                            changed |= ui
                                .selectable_value(&mut draft.falloff, mode, falloff_label(mode))
                                .changed();
                        }
                    });
            });

            if let Err(error) = draft.validate() {
                ui.separator();
                ui.colored_label(super::style::palette().warning, error.to_string());
            }
        });

    controller.ui.settings_open = open;
    if changed {
        controller.set_config(draft);
    }
}

fn numeric_row(ui: &mut Ui, label: &str, value: &mut i64) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(DragValue::new(value).speed(1)).changed()
    })
    .inner
}

fn falloff_label(mode: FalloffMode) -> &'static str {
    match mode {
        FalloffMode::WhileActive => "While dragging",
        FalloffMode::Always => "Always",
    }
}
