//! Drag state machine and pointer-to-index mapping for the counter track.
//!
//! The tracker keeps the interaction math pure and testable so the egui
//! integration stays small: the UI layer feeds it pixel coordinates and
//! reads back the selection. Mouse and touch are independently tracked
//! channels that share the same selection; the wheel channel steps the
//! selection directly.

/// Pixel geometry of the track, captured from the painted rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    /// Track height in pixels.
    pub height: f32,
    /// Screen-space y coordinate of the track's bottom edge.
    pub bottom: f32,
}

/// Selection state plus the screen-to-index mapping.
///
/// `selected_index` is clamped on every write; a drag is active while
/// either input channel is between its down and up events.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    selected_index: usize,
    value_count: usize,
    mouse_down: bool,
    touch_active: bool,
    geometry: Option<TrackGeometry>,
}

impl PointerTracker {
    /// Idle tracker with selection at index 0 and no known geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected index, always within `[0, value_count - 1]`.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// True while either input channel is mid-drag.
    pub fn is_active(&self) -> bool {
        self.mouse_down || self.touch_active
    }

    /// True while the mouse channel is mid-drag.
    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// True while the touch channel is mid-drag.
    pub fn is_touch_active(&self) -> bool {
        self.touch_active
    }

    /// Last known track geometry, if any.
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.geometry
    }

    /// Store freshly measured track geometry.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = Some(geometry);
    }

    /// Update the number of selectable values, re-clamping the selection.
    pub fn set_value_count(&mut self, count: usize) {
        self.value_count = count;
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// Clamped direct write of the selection.
    pub fn set_selected_index(&mut self, index: usize) {
        self.write_index(index);
    }

    /// Mouse press inside the hit region: begin tracking and recompute the
    /// index from the contact point.
    pub fn mouse_down(&mut self, pointer_y: f32) {
        self.mouse_down = true;
        self.recompute_index(pointer_y);
    }

    /// Mouse movement, observed globally; only meaningful while tracking.
    pub fn mouse_move(&mut self, pointer_y: f32) {
        if self.mouse_down {
            self.recompute_index(pointer_y);
        }
    }

    /// Mouse release, observed globally.
    pub fn mouse_up(&mut self) {
        self.mouse_down = false;
    }

    /// First touch point landed inside the hit region.
    pub fn touch_start(&mut self, pointer_y: f32) {
        self.touch_active = true;
        self.recompute_index(pointer_y);
    }

    /// Movement of the tracked touch point.
    pub fn touch_move(&mut self, pointer_y: f32) {
        if self.touch_active {
            self.recompute_index(pointer_y);
        }
    }

    /// End (or cancellation) of the tracked touch point.
    pub fn touch_end(&mut self) {
        self.touch_active = false;
    }

    /// Wheel step: negative vertical delta moves the selection up one
    /// index, positive moves it down one; both ends clamp.
    pub fn wheel_step(&mut self, delta_y: f32) {
        if self.value_count == 0 || delta_y == 0.0 {
            return;
        }
        if delta_y < 0.0 {
            self.write_index(self.selected_index.saturating_add(1));
        } else {
            self.write_index(self.selected_index.saturating_sub(1));
        }
    }

    /// Map a screen-space y coordinate to an index.
    ///
    /// Returns `None` until geometry is known (the caller treats that as a
    /// no-op). Rounding is `f32::round`, half away from zero; the exact
    /// tie-break is not load-bearing but must not drift between channels.
    fn index_for(&self, pointer_y: f32) -> Option<usize> {
        let geometry = self.geometry?;
        if geometry.height <= 0.0 || self.value_count == 0 {
            return None;
        }
        let offset_from_bottom = geometry.bottom - pointer_y;
        let steps = (self.value_count - 1) as f32;
        let raw = (offset_from_bottom / geometry.height) * steps;
        let index = raw.round().max(0.0) as usize;
        Some(index.min(self.value_count - 1))
    }

    fn recompute_index(&mut self, pointer_y: f32) {
        if let Some(index) = self.index_for(pointer_y) {
            self.write_index(index);
        }
    }

    fn write_index(&mut self, index: usize) {
        let clamped = index.min(self.value_count.saturating_sub(1));
        if clamped != self.selected_index {
            self.selected_index = clamped;
            tracing::debug!(index = clamped, "selection changed");
        }
    }
}
