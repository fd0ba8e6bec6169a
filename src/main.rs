#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the Toxicity Checker window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use toxcheck::config;
use toxcheck::egui_app::controller::EguiController;
use toxcheck::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use toxcheck::logging;
use toxcheck::prediction::PredictionClient;

const APP_TITLE: &str = "Toxicity Checker";
const INITIAL_WINDOW_SIZE: egui::Vec2 = egui::vec2(640.0, 720.0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size(INITIAL_WINDOW_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|_cc| match build_controller() {
            Ok(controller) => Ok(Box::new(EguiApp::new(controller))),
            Err(message) => {
                tracing::error!("{message}");
                Ok(Box::new(LaunchError { message }))
            }
        }),
    )?;
    Ok(())
}

fn build_controller() -> Result<EguiController, String> {
    let endpoint =
        config::load_endpoint().map_err(|err| format!("Failed to load config: {err}"))?;
    let client = PredictionClient::new(&endpoint);
    let label = format!(
        "{} ({})",
        endpoint.base_url(),
        endpoint.source().describe()
    );
    Ok(EguiController::new(Arc::new(client), label))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
