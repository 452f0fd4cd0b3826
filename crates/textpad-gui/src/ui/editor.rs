use eframe::egui;

use crate::EditorApp;

pub(crate) fn editor_pane(app: &mut EditorApp, ui: &mut egui::Ui) {
    ui.group(|ui| {
        let heading = if app.document.is_modified() {
            format!("{}*", app.document.display_name())
        } else {
            app.document.display_name()
        };
        ui.heading(heading);
        match app.document.path() {
            Some(path) => ui.small(path.display().to_string()),
            None => ui.small("Not saved yet."),
        };
        ui.separator();

        let word_wrap = app.session.word_wrap;
        let font = egui::FontId::monospace(app.session.font_size);
        let scroll = if word_wrap {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };

        let response = scroll
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let desired_width = if word_wrap {
                    ui.available_width()
                } else {
                    f32::INFINITY
                };
                ui.add(
                    egui::TextEdit::multiline(&mut app.document.content)
                        .font(font)
                        .desired_rows(24)
                        .desired_width(desired_width)
                        .lock_focus(true),
                )
            })
            .inner;

        if response.changed() {
            app.document.mark_modified();
        }
    });
}
