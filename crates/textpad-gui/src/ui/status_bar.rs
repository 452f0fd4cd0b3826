use eframe::egui;

use crate::EditorApp;

pub(crate) fn status_bar(app: &EditorApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let name = app.document.display_name();
        if app.document.is_modified() {
            ui.label(format!("{name}*"));
        } else {
            ui.label(name);
        }
        ui.separator();
        ui.label(format!(
            "{} lines, {} chars",
            app.document.line_count(),
            app.document.char_count()
        ));
        ui.separator();
        if let Some(message) = &app.error_message {
            ui.colored_label(egui::Color32::YELLOW, message);
        } else if !app.status.is_empty() {
            ui.label(&app.status);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(env!("CARGO_PKG_VERSION"));
            ui.label("Version: ");
        });
    });
}
