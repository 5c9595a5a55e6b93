//! Library exports for reuse in benchmarks and tests.
/// Application directory helpers.
pub mod app_dirs;
/// Configuration persistence.
pub mod config_io;
/// Core counter model: configuration, values, tracking, falloff.
pub mod counter;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
