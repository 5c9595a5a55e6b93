//! Shared state read by every display component.
//!
//! All mutations go through the named operations on
//! [`crate::egui_app::controller::CounterController`], keeping the
//! mutation surface auditable; the renderer and the debug overlay only
//! read from here.

use egui::TouchId;
use serde::Serialize;

use crate::counter::{CounterConfig, PointerTracker, ValueSequence};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Active configuration, replaced wholesale by the settings surface.
    pub config: CounterConfig,
    /// Memoized value sequence derived from the configuration.
    pub sequence: ValueSequence,
    /// Drag state, track geometry, and the selection.
    pub tracker: PointerTracker,
    /// Touch point that began the current touch interaction, if any;
    /// events from other touch points are noise.
    pub active_touch: Option<TouchId>,
    /// Whether the settings window is showing.
    pub settings_open: bool,
}

impl AppState {
    /// The selected member of the value sequence, if one exists.
    pub fn selected_value(&self) -> Option<i64> {
        self.sequence.get(self.tracker.selected_index())
    }

    /// Snapshot of the internal state for the debug overlay.
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            slider_height: self.tracker.geometry().map(|geometry| geometry.height),
            is_mouse_down: self.tracker.is_mouse_down(),
            is_touch_start: self.tracker.is_touch_active(),
            value: self.selected_value(),
            selected_index: self.tracker.selected_index(),
        }
    }
}

/// Internal state dump rendered by the debug overlay.
#[derive(Debug, Serialize)]
pub struct DebugSnapshot {
    /// Last measured track height, if known.
    pub slider_height: Option<f32>,
    /// Mouse channel mid-drag.
    pub is_mouse_down: bool,
    /// Touch channel mid-drag.
    pub is_touch_start: bool,
    /// Selected value, if the sequence is non-empty.
    pub value: Option<i64>,
    /// Selected index.
    pub selected_index: usize,
}
