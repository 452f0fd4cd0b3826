use eframe::egui;

use crate::{EditorApp, PendingAction, APP_NAME};

pub(crate) fn unsaved_changes(app: &mut EditorApp, ctx: &egui::Context) {
    let Some(action) = app.pending_action.clone() else {
        return;
    };

    let question = match action {
        PendingAction::Exit => "Save them before exiting?",
        _ => "Save them before continuing?",
    };

    egui::Window::new("Unsaved Changes")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "{} has unsaved changes.",
                app.document.display_name()
            ));
            ui.add_space(8.0);
            ui.label(question);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    if app.handle_save() {
                        app.proceed_pending(ctx);
                    } else {
                        app.cancel_pending();
                    }
                }
                if ui.button("Discard").clicked() {
                    app.proceed_pending(ctx);
                }
                if ui.button("Cancel").clicked() {
                    app.cancel_pending();
                }
            });
        });
}

pub(crate) fn about_window(app: &mut EditorApp, ctx: &egui::Context) {
    if !app.show_about {
        return;
    }

    egui::Window::new("About")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading(APP_NAME);
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.label("A small desktop editor for plain text files.");
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                app.show_about = false;
            }
        });
}
