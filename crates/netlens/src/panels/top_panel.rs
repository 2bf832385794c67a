use egui::{Button, TextEdit, Ui};
use strum::IntoEnumIterator;

use netlens_core::data::http::Method;

use crate::panels::HORIZONTAL_GAP;

#[derive(Default)]
pub struct TopPanel {
    pub method: Method,
    pub url: String,
    pub body: String,
}

impl TopPanel {
    pub fn new(method: Method, url: String, body: String) -> Self {
        TopPanel { method, url, body }
    }

    /// Returns true when the user asked to send the request.
    pub fn render(&mut self, ui: &mut Ui, sending: bool, headers_visible: &mut bool) -> bool {
        let mut send = false;
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("request_method")
                .selected_text(self.method.to_string())
                .width(80.0)
                .show_ui(ui, |ui| {
                    for method in Method::iter() {
                        ui.selectable_value(&mut self.method, method, method.to_string());
                    }
                });
            let url_width = ui.available_width() - 160.0;
            ui.add(
                TextEdit::singleline(&mut self.url)
                    .hint_text("Enter request URL")
                    .desired_width(url_width),
            );
            ui.add_space(HORIZONTAL_GAP);
            let label = if sending { "Sending..." } else { "Send" };
            if ui.add_enabled(!sending, Button::new(label)).clicked() {
                send = true;
            }
            ui.checkbox(headers_visible, "Headers");
        });
        ui.add(
            TextEdit::multiline(&mut self.body)
                .hint_text("Request body")
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        send
    }
}
