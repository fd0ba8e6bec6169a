//! Library exports for the binary and tests.
/// Settings file, application directories and prediction service endpoint.
pub mod config;
/// Screen state, controller and egui renderer.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Prediction service wire types and client.
pub mod prediction;
