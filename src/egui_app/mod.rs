//! egui application modules: state, controller, and renderer.

/// Decorative animation assets.
pub mod animation;
/// Controller bridging the model to the renderer.
pub mod controller;
/// Shared UI state types.
pub mod state;
/// egui renderer.
pub mod ui;
