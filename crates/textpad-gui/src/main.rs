#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use argh::FromArgs;
use eframe::{egui, NativeOptions, Renderer};
use log::error;
use textpad_gui::{EditorApp, APP_NAME};

#[derive(FromArgs)]
/// Edit a plain text file.
struct Args {
    /// text file to open at startup
    #[argh(positional)]
    file: Option<PathBuf>,
}

trait NativeOptionsExt {
    fn with_centered(self, centered: bool) -> Self;
}

impl NativeOptionsExt for eframe::NativeOptions {
    fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let wgpu_result = run_app(create_native_options(Renderer::Wgpu), args.file.clone());

    match wgpu_result {
        Ok(result) => Ok(result),
        Err(wgpu_error) => {
            report_renderer_error("WGPU", &wgpu_error);

            let glow_result = run_app(create_native_options(Renderer::Glow), args.file);
            match glow_result {
                Ok(result) => Ok(result),
                Err(glow_error) => {
                    report_renderer_error("Glow", &glow_error);
                    Err(wgpu_error)
                }
            }
        }
    }
}

fn create_native_options(renderer: Renderer) -> NativeOptions {
    NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([640.0, 420.0]),
        renderer,
        ..Default::default()
    }
    .with_centered(true)
}

fn run_app(options: NativeOptions, file: Option<PathBuf>) -> eframe::Result<()> {
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(EditorApp::new(cc, file)))),
    )
}

fn report_renderer_error(renderer: &str, error: &eframe::Error) {
    error!("Failed to initialize {renderer} renderer: {error}");

    #[cfg(target_os = "windows")]
    {
        use rfd::MessageDialog;

        MessageDialog::new()
            .set_title(APP_NAME)
            .set_description(format!(
                "Failed to initialize {renderer} renderer:\n{error}\n\nAttempting fallback..."
            ))
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
