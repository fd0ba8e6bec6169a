//! Desktop UI: state, controller, derived view values and the egui renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
