//! egui renderer for the classification screen.

mod card;
mod result_panel;
mod status_bar;
pub mod style;

use std::time::Duration;

use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Smallest window that still fits the card and status bar.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(360.0, 520.0);
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the screen from the controller's state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let analyze = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));
        if analyze {
            self.controller.request_classification();
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.handle_shortcuts(ctx);
        self.render_status_bar(ctx);
        self.render_page(ctx);
        if self.controller.ui.loading {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
