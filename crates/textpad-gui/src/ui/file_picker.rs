use std::path::PathBuf;

use eframe::egui;

use crate::ui::menu_item::MenuItemComponent;
use crate::{EditorApp, NEW_FILE_SHORTCUT, OPEN_FILE_SHORTCUT, SAVE_AS_SHORTCUT, SAVE_SHORTCUT};

pub(crate) fn file_menu(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.menu_button("File", |ui| {
        file_menu_contents(app, ui, None);
    });
}

fn file_menu_contents(
    app: &mut EditorApp,
    ui: &mut egui::Ui,
    mut recorder: Option<&mut dyn FileMenuRecorder>,
) {
    let new_response = ui.menu_item_shortcut("New", &NEW_FILE_SHORTCUT);
    if let Some(recorder) = recorder.as_mut() {
        recorder.record(FileMenuItem::New, new_response.enabled());
    }
    if new_response.clicked() {
        app.request_new();
    }

    let open_response = ui.menu_item_shortcut("Open...", &OPEN_FILE_SHORTCUT);
    if let Some(recorder) = recorder.as_mut() {
        recorder.record(FileMenuItem::Open, open_response.enabled());
    }
    if open_response.clicked() {
        app.request_open();
    }

    let has_recent = !app.session.recent_files.is_empty();
    if let Some(recorder) = recorder.as_mut() {
        recorder.record(FileMenuItem::OpenRecent, has_recent);
    }
    ui.add_enabled_ui(has_recent, |ui| {
        ui.menu_button("Open Recent", |ui| {
            let recent = app.session.recent_files.clone();
            for path in recent {
                if ui.button(path.display().to_string()).clicked() {
                    app.request_open_path(path);
                    ui.close_menu();
                }
            }
        });
    });

    ui.separator();

    let save_response = ui.menu_item_shortcut("Save", &SAVE_SHORTCUT);
    if let Some(recorder) = recorder.as_mut() {
        recorder.record(FileMenuItem::Save, save_response.enabled());
    }
    if save_response.clicked() {
        app.handle_save();
    }

    let save_as_response = ui.menu_item_shortcut("Save as...", &SAVE_AS_SHORTCUT);
    if let Some(recorder) = recorder.as_mut() {
        recorder.record(FileMenuItem::SaveAs, save_as_response.enabled());
    }
    if save_as_response.clicked() {
        app.handle_save_as();
    }

    ui.separator();

    if ui.button("Exit").clicked() {
        let ctx = ui.ctx().clone();
        app.request_exit(&ctx);
        ui.close_menu();
    }
}

pub(crate) fn view_menu(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut app.session.word_wrap, "Word wrap");
        ui.horizontal(|ui| {
            ui.label("Font size");
            ui.add(
                egui::DragValue::new(&mut app.session.font_size)
                    .clamp_range(8.0..=32.0)
                    .speed(0.5),
            );
        });
    });
}

pub(crate) fn help_menu(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.menu_button("Help", |ui| {
        if ui.button("About").clicked() {
            app.show_about = true;
            ui.close_menu();
        }
    });
}

pub(crate) fn pick_text_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"])
        .pick_file()
}

pub(crate) fn save_text_file(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(file_name)
        .add_filter("Text Files", &["txt"])
        .add_filter("All Files", &["*"])
        .save_file()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum FileMenuItem {
    New,
    Open,
    OpenRecent,
    Save,
    SaveAs,
}

trait FileMenuRecorder {
    fn record(&mut self, item: FileMenuItem, enabled: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EditorApp;
    use eframe::egui;
    use std::collections::HashMap;

    #[test]
    fn file_menu_items_enabled_for_a_fresh_document() {
        let mut app = EditorApp::default();
        assert!(app.document.path().is_none());

        let recorder = record_menu(&mut app);

        assert!(recorder.is_enabled(FileMenuItem::New));
        assert!(recorder.is_enabled(FileMenuItem::Open));
        assert!(recorder.is_enabled(FileMenuItem::Save));
        assert!(recorder.is_enabled(FileMenuItem::SaveAs));
        assert!(
            !recorder.is_enabled(FileMenuItem::OpenRecent),
            "no recent files yet"
        );
    }

    #[test]
    fn open_recent_enabled_once_a_file_was_remembered() {
        let mut app = EditorApp::default();
        app.session.remember(std::path::Path::new("/tmp/notes.txt"));

        let recorder = record_menu(&mut app);

        assert!(recorder.is_enabled(FileMenuItem::OpenRecent));
    }

    fn record_menu(app: &mut EditorApp) -> RecordingMenuRecorder {
        let ctx = egui::Context::default();
        let mut recorder = RecordingMenuRecorder::default();

        ctx.begin_frame(egui::RawInput::default());
        egui::CentralPanel::default().show(&ctx, |ui| {
            file_menu_contents(app, ui, Some(&mut recorder));
        });
        let _ = ctx.end_frame();

        recorder
    }

    #[derive(Default)]
    struct RecordingMenuRecorder {
        entries: HashMap<FileMenuItem, bool>,
    }

    impl RecordingMenuRecorder {
        fn is_enabled(&self, item: FileMenuItem) -> bool {
            *self.entries.get(&item).unwrap_or(&false)
        }
    }

    impl FileMenuRecorder for RecordingMenuRecorder {
        fn record(&mut self, item: FileMenuItem, enabled: bool) {
            self.entries.insert(item, enabled);
        }
    }
}
