use eframe::egui::{Button, KeyboardShortcut, Response, Ui, WidgetText};

pub trait MenuItemComponent {
    fn menu_item_shortcut(self, label: impl Into<WidgetText>, shortcut: &KeyboardShortcut)
        -> Response;
}

impl MenuItemComponent for &mut Ui {
    fn menu_item_shortcut(
        self,
        label: impl Into<WidgetText>,
        shortcut: &KeyboardShortcut,
    ) -> Response {
        let response =
            self.add(Button::new(label).shortcut_text(self.ctx().format_shortcut(shortcut)));
        if response.clicked() {
            self.close_menu();
        }

        response
    }
}
