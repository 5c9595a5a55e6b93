//! Core model for the counter control.
//!
//! Everything here is pure and independent of the UI layer: the
//! configuration with its invariants, the derived value sequence, the
//! pointer-to-index tracker, and the falloff curve. The egui integration
//! code stays small by leaning on these modules.

/// Configuration and its validation rules.
pub mod config;
/// The Gaussian ripple curve around the selected tick.
pub mod falloff;
/// Drag state machine and pointer-to-index mapping.
pub mod tracker;
/// Derivation and caching of the selectable value sequence.
pub mod values;

pub use config::{ConfigError, CounterConfig, FalloffMode};
pub use tracker::{PointerTracker, TrackGeometry};
pub use values::ValueSequence;
