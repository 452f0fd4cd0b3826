use std::path::{Path, PathBuf};

use chrono::Local;
use eframe::egui;
use log::warn;
use textpad::{Document, Error, Session};

pub mod ui;

pub use ui::{dialogs, editor, file_picker, status_bar, theme};

pub const APP_NAME: &str = "Textpad";

pub(crate) const SAVED_AT_FORMAT: &str = "%H:%M:%S";

const CTRL_OR_CMD: egui::Modifiers = if cfg!(target_os = "macos") {
    egui::Modifiers::MAC_CMD
} else {
    egui::Modifiers::CTRL
};
const CTRL_OR_CMD_SHIFT: egui::Modifiers = if cfg!(target_os = "macos") {
    egui::Modifiers {
        alt: false,
        ctrl: false,
        shift: true,
        mac_cmd: true,
        command: false,
    }
} else {
    egui::Modifiers {
        alt: false,
        ctrl: true,
        shift: true,
        mac_cmd: false,
        command: false,
    }
};

pub(crate) const NEW_FILE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(CTRL_OR_CMD, egui::Key::N);
pub(crate) const OPEN_FILE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(CTRL_OR_CMD, egui::Key::O);
pub(crate) const SAVE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(CTRL_OR_CMD, egui::Key::S);
pub(crate) const SAVE_AS_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(CTRL_OR_CMD_SHIFT, egui::Key::S);

/// Action held back while the unsaved-changes dialog is open. The dialog
/// resumes it on Save or Discard and drops it on Cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PendingAction {
    NewFile,
    OpenPicker,
    OpenPath(PathBuf),
    Exit,
}

pub struct EditorApp {
    pub(crate) document: Document,
    pub(crate) session: Session,
    pub(crate) status: String,
    pub(crate) error_message: Option<String>,
    pub(crate) show_about: bool,
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) exit_confirmed: bool,
    applied_title: String,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self {
            document: Document::new(),
            session: Session::default(),
            status: String::new(),
            error_message: None,
            show_about: false,
            pending_action: None,
            exit_confirmed: false,
            applied_title: String::new(),
        }
    }
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, file: Option<PathBuf>) -> Self {
        theme::install(&cc.egui_ctx);

        let session = cc
            .storage
            .and_then(|storage| eframe::get_value::<Session>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let mut app = Self {
            session,
            ..Self::default()
        };

        let startup_file = file.or_else(|| {
            app.session
                .last_file
                .clone()
                .filter(|path| path.exists())
        });
        if let Some(path) = startup_file {
            app.open_path(&path);
        }

        app
    }

    pub(crate) fn set_error_message(&mut self, message: String) {
        warn!("{message}");
        self.error_message = Some(message);
        self.status.clear();
    }

    pub(crate) fn clear_error_message(&mut self) {
        self.error_message = None;
    }

    pub(crate) fn window_title(&self) -> String {
        match self.document.path() {
            Some(path) => format!("{APP_NAME} - {}", path.display()),
            None => APP_NAME.to_owned(),
        }
    }

    pub(crate) fn request_new(&mut self) {
        if self.document.is_modified() {
            self.pending_action = Some(PendingAction::NewFile);
        } else {
            self.new_file();
        }
    }

    pub(crate) fn request_open(&mut self) {
        if self.document.is_modified() {
            self.pending_action = Some(PendingAction::OpenPicker);
        } else {
            self.open_picker();
        }
    }

    pub(crate) fn request_open_path(&mut self, path: PathBuf) {
        if self.document.is_modified() {
            self.pending_action = Some(PendingAction::OpenPath(path));
        } else {
            self.open_path(&path);
        }
    }

    pub(crate) fn request_exit(&mut self, ctx: &egui::Context) {
        if self.document.is_modified() {
            self.pending_action = Some(PendingAction::Exit);
        } else {
            self.exit_confirmed = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    pub(crate) fn proceed_pending(&mut self, ctx: &egui::Context) {
        let Some(action) = self.pending_action.take() else {
            return;
        };

        match action {
            PendingAction::NewFile => self.new_file(),
            PendingAction::OpenPicker => self.open_picker(),
            PendingAction::OpenPath(path) => self.open_path(&path),
            PendingAction::Exit => {
                self.exit_confirmed = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
    }

    fn new_file(&mut self) {
        self.document = Document::new();
        self.clear_error_message();
        self.status.clear();
    }

    fn open_picker(&mut self) {
        if let Some(path) = file_picker::pick_text_file() {
            self.open_path(&path);
        }
    }

    pub(crate) fn open_path(&mut self, path: &Path) {
        match Document::from_path(path) {
            Ok(document) => {
                self.document = document;
                self.session.remember(path);
                self.clear_error_message();
                self.status = format!("Opened {}", path.display());
            }
            Err(err) => {
                self.session.recent_files.retain(|recent| recent != path);
                self.set_error_message(format!("Failed to open {}: {err}", path.display()));
            }
        }
    }

    pub(crate) fn handle_save(&mut self) -> bool {
        match self.document.save() {
            Ok(path) => {
                self.finish_save(&path);
                true
            }
            Err(Error::NoPath) => self.handle_save_as(),
            Err(err) => {
                self.set_error_message(format!("Failed to save: {err}"));
                false
            }
        }
    }

    pub(crate) fn handle_save_as(&mut self) -> bool {
        let Some(path) = file_picker::save_text_file(&self.save_dialog_file_name()) else {
            return false;
        };

        match self.document.save_as(&path) {
            Ok(path) => {
                self.finish_save(&path);
                true
            }
            Err(err) => {
                self.set_error_message(format!("Failed to save {}: {err}", path.display()));
                false
            }
        }
    }

    fn save_dialog_file_name(&self) -> String {
        match self.document.path() {
            Some(_) => self.document.display_name(),
            None => "untitled.txt".to_owned(),
        }
    }

    fn finish_save(&mut self, path: &Path) {
        self.session.remember(path);
        self.clear_error_message();
        self.status = format!(
            "Saved {} at {}",
            path.display(),
            Local::now().format(SAVED_AT_FORMAT)
        );
    }

    fn handle_accelerators(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_AS_SHORTCUT)) {
            self.handle_save_as();
        } else if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.handle_save();
        } else if ctx.input_mut(|i| i.consume_shortcut(&OPEN_FILE_SHORTCUT)) {
            self.request_open();
        } else if ctx.input_mut(|i| i.consume_shortcut(&NEW_FILE_SHORTCUT)) {
            self.request_new();
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.document.is_modified() && !self.exit_confirmed {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.pending_action = Some(PendingAction::Exit);
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.window_title();
        if title != self.applied_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.applied_title = title;
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_accelerators(ctx);
        self.handle_close_request(ctx);
        self.sync_window_title(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                file_picker::file_menu(self, ui);
                file_picker::view_menu(self, ui);
                file_picker::help_menu(self, ui);
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::status_bar(self, ui);
        });

        egui::SidePanel::left("action_buttons")
            .resizable(false)
            .default_width(110.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.with_layout(egui::Layout::top_down_justified(egui::Align::Center), |ui| {
                    if ui.button("Open").clicked() {
                        self.request_open();
                    }
                    if ui.button("Save").clicked() {
                        self.handle_save();
                    }
                    if ui.button("Save as...").clicked() {
                        self.handle_save_as();
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            editor::editor_pane(self, ui);
        });

        dialogs::unsaved_changes(self, ctx);
        dialogs::about_window(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.session.last_file = self.document.path().map(Path::to_path_buf);
        eframe::set_value(storage, eframe::APP_KEY, &self.session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn open_path_loads_the_document_and_tracks_recents() {
        let tempdir = tempdir().expect("temp dir");
        let path = tempdir.path().join("notes.txt");
        fs::write(&path, "hello from disk").expect("write sample file");

        let mut app = EditorApp::default();
        app.open_path(&path);

        assert_eq!(app.document.content, "hello from disk");
        assert_eq!(app.document.path(), Some(path.as_path()));
        assert_eq!(app.session.recent_files, vec![path.clone()]);
        assert!(app.error_message.is_none());
        assert_eq!(app.window_title(), format!("{APP_NAME} - {}", path.display()));
    }

    #[test]
    fn open_path_failure_sets_the_error_and_drops_the_recent_entry() {
        let tempdir = tempdir().expect("temp dir");
        let missing = tempdir.path().join("gone.txt");

        let mut app = EditorApp::default();
        app.session.remember(&missing);
        app.open_path(&missing);

        assert!(app.error_message.is_some());
        assert!(app.status.is_empty());
        assert!(app.session.recent_files.is_empty());
        assert!(app.document.path().is_none(), "document is left untouched");
    }

    #[test]
    fn requests_on_a_modified_document_are_held_back() {
        let mut app = EditorApp::default();
        app.document.content.push_str("unsaved");
        app.document.mark_modified();

        app.request_new();
        assert_eq!(app.pending_action, Some(PendingAction::NewFile));
        assert_eq!(app.document.content, "unsaved", "document is untouched");

        app.cancel_pending();
        assert_eq!(app.pending_action, None);
    }

    #[test]
    fn proceeding_with_a_pending_new_file_resets_the_document() {
        let ctx = egui::Context::default();

        let mut app = EditorApp::default();
        app.document.content.push_str("unsaved");
        app.document.mark_modified();
        app.request_new();

        app.proceed_pending(&ctx);
        assert_eq!(app.pending_action, None);
        assert!(app.document.content.is_empty());
        assert!(!app.document.is_modified());
        assert_eq!(app.window_title(), APP_NAME);
    }

    #[test]
    fn request_new_on_a_clean_document_applies_immediately() {
        let tempdir = tempdir().expect("temp dir");
        let path = tempdir.path().join("notes.txt");
        fs::write(&path, "content").expect("write sample file");

        let mut app = EditorApp::default();
        app.open_path(&path);
        app.request_new();

        assert_eq!(app.pending_action, None);
        assert!(app.document.path().is_none());
        assert_eq!(app.document.display_name(), textpad::UNTITLED_NAME);
    }

    #[test]
    fn finish_save_reports_the_path_in_the_status_line() {
        let mut app = EditorApp::default();
        app.set_error_message("stale error".to_owned());
        app.finish_save(Path::new("/tmp/out.txt"));

        assert!(app.error_message.is_none());
        assert!(app.status.starts_with("Saved /tmp/out.txt at "));
        assert_eq!(app.session.last_file, Some(PathBuf::from("/tmp/out.txt")));
    }
}
