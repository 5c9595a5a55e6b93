//! Translates one frame of egui input into controller operations.
//!
//! Press detection is layer-aware through the counter's response (a press
//! on a window floating above the control does not begin a drag), while
//! moves and releases are read from the raw input state so a drag that
//! leaves the control (or the window) keeps tracking until release.

use eframe::egui;

use crate::egui_app::controller::CounterController;

pub(super) fn apply_frame_input(
    controller: &mut CounterController,
    ctx: &egui::Context,
    response: &egui::Response,
) {
    apply_mouse(controller, ctx, response);
    apply_touches(controller, ctx, response);
    apply_wheel(controller, ctx, response);
}

fn apply_mouse(
    controller: &mut CounterController,
    ctx: &egui::Context,
    response: &egui::Response,
) {
    let pressed = ctx.input(|i| i.pointer.primary_pressed());
    if pressed && response.hovered() {
        if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
            controller.pointer_pressed(pos.y);
        }
    }
    if controller.ui.tracker.is_mouse_down() {
        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            controller.pointer_moved(pos.y);
        }
        if ctx.input(|i| i.pointer.primary_released()) {
            controller.pointer_released();
        }
    }
}

fn apply_touches(
    controller: &mut CounterController,
    ctx: &egui::Context,
    response: &egui::Response,
) {
    let events = ctx.input(|i| i.events.clone());
    for event in events {
        let egui::Event::Touch { id, phase, pos, .. } = event else {
            continue;
        };
        match phase {
            egui::TouchPhase::Start => {
                if response.rect.contains(pos) {
                    controller.touch_started(id, pos.y);
                }
            }
            egui::TouchPhase::Move => controller.touch_moved(id, pos.y),
            egui::TouchPhase::End | egui::TouchPhase::Cancel => controller.touch_ended(id),
        }
    }
}

fn apply_wheel(
    controller: &mut CounterController,
    ctx: &egui::Context,
    response: &egui::Response,
) {
    if !response.hovered() {
        return;
    }
    let delta_y = ctx.input(|i| i.raw_scroll_delta.y);
    if delta_y != 0.0 {
        controller.wheel(delta_y);
    }
}
