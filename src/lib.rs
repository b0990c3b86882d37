//! Library exports for reuse in benchmarks and tests.
/// Application directory helpers.
pub mod app_dirs;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Feature encoding, validation, scaling, and the frozen classifier.
pub mod model;
