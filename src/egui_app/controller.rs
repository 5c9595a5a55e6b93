//! Applies input and configuration changes to the shared state.
//!
//! The controller is the only writer of [`AppState`]. Every input
//! operation is gated on a valid configuration (an invalid config means
//! the control renders only its diagnostic and processes nothing), and
//! geometry reports are ignored mid-drag, so an in-flight drag keeps using
//! the last known measurements.

use egui::TouchId;

use crate::config_io;
use crate::counter::{ConfigError, CounterConfig, TrackGeometry};

use super::state::AppState;

/// Owns the shared state and the fixed set of mutation operations.
#[derive(Debug, Default)]
pub struct CounterController {
    /// Shared state read by the display components.
    pub ui: AppState,
}

impl CounterController {
    /// Create a controller from the persisted configuration.
    pub fn new() -> Result<Self, config_io::ConfigIoError> {
        let config = config_io::load_or_default()?;
        Ok(Self::with_config(config))
    }

    /// Create a controller from an explicit configuration, bypassing
    /// persistence. Used by tests and benchmarks.
    pub fn with_config(config: CounterConfig) -> Self {
        let mut controller = Self {
            ui: AppState::default(),
        };
        controller.apply_config(config);
        controller
    }

    /// The first violated configuration invariant, if any.
    pub fn config_error(&self) -> Option<ConfigError> {
        self.ui.config.validate().err()
    }

    /// The currently selected value, if the configuration admits one.
    pub fn selected_value(&self) -> Option<i64> {
        self.ui.selected_value()
    }

    /// Replace the configuration wholesale: re-derive the value sequence
    /// and re-clamp the selection. An invalid config is stored anyway so
    /// the control fails closed into its diagnostic state.
    pub fn apply_config(&mut self, config: CounterConfig) {
        if let Err(error) = config.validate() {
            tracing::warn!(%error, "applied configuration is invalid");
        }
        self.ui.config = config;
        self.ui.sequence.ensure(&self.ui.config);
        self.ui.tracker.set_value_count(self.ui.sequence.len());
    }

    /// Replace the configuration and persist it. Persistence failures are
    /// logged, not surfaced; the in-memory state is already updated.
    pub fn set_config(&mut self, config: CounterConfig) {
        self.apply_config(config);
        if let Err(error) = config_io::save(&self.ui.config) {
            tracing::warn!(%error, "failed to persist configuration");
        }
    }

    /// Clamped direct write of the selection.
    pub fn set_selected_index(&mut self, index: usize) {
        self.ui.tracker.set_selected_index(index);
    }

    /// Record the painted track rect. Skipped while a drag is in flight
    /// (stale geometry is tolerated until release) and while the
    /// configuration is invalid (no setup in the diagnostic state).
    pub fn report_track_rect(&mut self, height: f32, bottom: f32) {
        if self.config_error().is_some() || self.ui.tracker.is_active() {
            return;
        }
        let geometry = TrackGeometry { height, bottom };
        if self.ui.tracker.geometry() != Some(geometry) {
            self.ui.tracker.set_geometry(geometry);
            tracing::debug!(height, bottom, "track geometry updated");
        }
    }

    /// Mouse press inside the counter's hit region.
    pub fn pointer_pressed(&mut self, pointer_y: f32) {
        if self.config_error().is_some() {
            return;
        }
        self.ui.tracker.mouse_down(pointer_y);
    }

    /// Mouse movement, observed globally while tracking.
    pub fn pointer_moved(&mut self, pointer_y: f32) {
        if self.config_error().is_some() {
            return;
        }
        self.ui.tracker.mouse_move(pointer_y);
    }

    /// Mouse release, observed globally.
    pub fn pointer_released(&mut self) {
        self.ui.tracker.mouse_up();
    }

    /// Touch start inside the hit region. Only the first touch point is
    /// tracked; starts from additional points are ignored.
    pub fn touch_started(&mut self, id: TouchId, pointer_y: f32) {
        if self.config_error().is_some() || self.ui.active_touch.is_some() {
            return;
        }
        self.ui.active_touch = Some(id);
        self.ui.tracker.touch_start(pointer_y);
    }

    /// Movement of a touch point; non-tracked points are noise.
    pub fn touch_moved(&mut self, id: TouchId, pointer_y: f32) {
        if self.ui.active_touch == Some(id) {
            self.ui.tracker.touch_move(pointer_y);
        }
    }

    /// End or cancellation of a touch point.
    pub fn touch_ended(&mut self, id: TouchId) {
        if self.ui.active_touch == Some(id) {
            self.ui.active_touch = None;
            self.ui.tracker.touch_end();
        }
    }

    /// Wheel input over the control; steps the selection when the wheel
    /// channel is enabled.
    pub fn wheel(&mut self, delta_y: f32) {
        if self.config_error().is_some() || !self.ui.config.wheel {
            return;
        }
        self.ui.tracker.wheel_step(delta_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CounterController {
        let mut controller = CounterController::with_config(CounterConfig::default());
        controller.report_track_rect(600.0, 700.0);
        controller
    }

    #[test]
    fn press_move_release_updates_selection() {
        let mut controller = controller();
        controller.pointer_pressed(700.0);
        assert!(controller.ui.tracker.is_active());
        controller.pointer_moved(400.0);
        controller.pointer_released();
        assert_eq!(controller.selected_value(), Some(60));
        assert!(!controller.ui.tracker.is_active());
    }

    #[test]
    fn geometry_reports_are_ignored_mid_drag() {
        let mut controller = controller();
        controller.pointer_pressed(700.0);
        controller.report_track_rect(300.0, 350.0);
        assert_eq!(
            controller.ui.tracker.geometry(),
            Some(TrackGeometry {
                height: 600.0,
                bottom: 700.0
            })
        );
        controller.pointer_released();
        controller.report_track_rect(300.0, 350.0);
        assert_eq!(
            controller.ui.tracker.geometry(),
            Some(TrackGeometry {
                height: 300.0,
                bottom: 350.0
            })
        );
    }

    #[test]
    fn invalid_config_disables_all_input() {
        let broken = CounterConfig {
            step: 7,
            ..CounterConfig::default()
        };
        let mut controller = CounterController::with_config(broken);
        assert!(controller.config_error().is_some());
        controller.report_track_rect(600.0, 700.0);
        controller.pointer_pressed(400.0);
        assert!(!controller.ui.tracker.is_active());
        assert_eq!(controller.ui.tracker.geometry(), None);
    }

    #[test]
    fn replacing_the_config_reclamps_the_selection() {
        let mut controller = controller();
        controller.set_selected_index(120);
        controller.apply_config(CounterConfig {
            max_value: 60,
            ..CounterConfig::default()
        });
        assert_eq!(controller.ui.tracker.selected_index(), 60);
        assert_eq!(controller.selected_value(), Some(60));
    }

    #[test]
    fn second_touch_point_is_noise() {
        let mut controller = controller();
        let first = TouchId(1);
        let second = TouchId(2);
        controller.touch_started(first, 700.0);
        controller.touch_started(second, 100.0);
        assert_eq!(controller.ui.tracker.selected_index(), 0);
        controller.touch_moved(second, 100.0);
        assert_eq!(controller.ui.tracker.selected_index(), 0);
        controller.touch_ended(second);
        assert!(controller.ui.tracker.is_touch_active());
        controller.touch_moved(first, 400.0);
        assert_eq!(controller.ui.tracker.selected_index(), 60);
        controller.touch_ended(first);
        assert!(!controller.ui.tracker.is_active());
    }

    #[test]
    fn wheel_requires_the_channel_to_be_enabled() {
        let mut controller = controller();
        controller.wheel(-1.0);
        assert_eq!(controller.ui.tracker.selected_index(), 0);

        controller.apply_config(CounterConfig {
            wheel: true,
            ..CounterConfig::default()
        });
        controller.wheel(-1.0);
        assert_eq!(controller.ui.tracker.selected_index(), 1);
        controller.wheel(3.5);
        assert_eq!(controller.ui.tracker.selected_index(), 0);
    }
}
