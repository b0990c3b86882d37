#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based churnscope UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use churnscope::egui_app::animation::AnimationSet;
use churnscope::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use churnscope::logging;
use churnscope::model::artifact::ChurnModel;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    // Both artifacts load before the first frame; either failure is fatal
    // and replaces the UI with the error screen.
    let startup = load_startup_artifacts();

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(640.0, 780.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Churnscope",
        native_options,
        Box::new(move |_cc| match startup {
            Ok((model, animations)) => Ok(Box::new(EguiApp::new(model, animations))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

fn load_startup_artifacts() -> Result<(ChurnModel, AnimationSet), String> {
    let model = ChurnModel::load()
        .map_err(|err| format!("Failed to load classifier artifact: {err}"))?;
    let animations = AnimationSet::load_embedded()
        .map_err(|err| format!("Failed to load animation assets: {err}"))?;
    tracing::info!(trees = model.tree_count(), "Startup artifacts loaded");
    Ok((model, animations))
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
