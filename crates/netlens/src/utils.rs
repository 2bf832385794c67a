use eframe::emath::Align;
use eframe::epaint::text::LayoutJob;
use egui::{Color32, FontSelection, RichText, Style, Ui};

use netlens_core::data::http::StatusTier;

pub enum HighlightValue {
    None,
    Usize(usize),
}

pub fn build_with_count_ui_header(
    name: String,
    highlight_value: HighlightValue,
    ui: &Ui,
) -> LayoutJob {
    let mut lb = LayoutJob::default();
    let style = Style::default();
    RichText::new(name + " ")
        .color(ui.visuals().text_color())
        .strong()
        .append_to(&mut lb, &style, FontSelection::Default, Align::Center);
    match highlight_value {
        HighlightValue::Usize(value) => {
            RichText::new(format!("({})", value))
                .color(Color32::GREEN)
                .strong()
                .append_to(&mut lb, &style, FontSelection::Default, Align::Center);
        }
        HighlightValue::None => {}
    }
    lb
}

pub fn status_color(tier: StatusTier) -> Color32 {
    match tier {
        StatusTier::Success => Color32::from_rgb(0x2e, 0xa0, 0x43),
        StatusTier::Redirect => Color32::from_rgb(0xe8, 0x8a, 0x10),
        StatusTier::Error => Color32::from_rgb(0xd0, 0x2b, 0x2b),
    }
}
