use eframe::egui::{self, Color32, Margin, Style, Vec2};

#[derive(Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub soft_accent: Color32,
    pub separator: Color32,
    pub text_primary: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 30),
            panel: Color32::from_rgb(34, 37, 43),
            soft_accent: Color32::from_rgb(110, 140, 200),
            separator: Color32::from_rgb(58, 62, 72),
            text_primary: Color32::from_rgb(214, 216, 222),
        }
    }
}

pub fn install(ctx: &egui::Context) {
    let palette = Palette::default();
    apply_visuals(ctx, &palette);
    ctx.style_mut(|style| apply_spacing(style));
}

fn apply_visuals(ctx: &egui::Context, palette: &Palette) {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.text_primary);
    visuals.widgets.noninteractive.bg_fill = palette.panel;
    visuals.widgets.noninteractive.bg_stroke.color = palette.separator;
    visuals.widgets.noninteractive.fg_stroke.color = palette.text_primary;
    visuals.widgets.inactive.bg_fill = palette.panel;
    visuals.widgets.inactive.fg_stroke.color = palette.text_primary;
    visuals.widgets.hovered.bg_fill = palette.soft_accent.gamma_multiply(0.2);
    visuals.widgets.active.bg_fill = palette.soft_accent.gamma_multiply(0.3);
    visuals.widgets.open.bg_fill = palette.panel;
    visuals.extreme_bg_color = palette.background;
    visuals.panel_fill = palette.background;

    ctx.set_visuals(visuals);
}

fn apply_spacing(style: &mut Style) {
    style.spacing.item_spacing = Vec2::new(10.0, 6.0);
    style.spacing.button_padding = Vec2::new(12.0, 6.0);
    style.spacing.window_margin = Margin::same(12);
    style.spacing.menu_margin = Margin::same(8);
}
