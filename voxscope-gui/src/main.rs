//! Voxscope GUI application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod state;
mod ui;
mod util;
mod viewer;

use std::path::PathBuf;

use app::VoxscopeApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // An optional dataset path may be given on the command line; otherwise
    // loading goes through the file dialog.
    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Voxscope",
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx);
            let mut app = VoxscopeApp::default();
            if let Some(path) = initial_path {
                app.open_volume(&path);
            }
            Ok(Box::new(app))
        }),
    )
}
