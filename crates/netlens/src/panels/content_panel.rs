use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use netlens_core::view::resource_panel::ContentRenderer;

#[derive(Default)]
pub struct ContentState {
    body: Option<Vec<u8>>,
    content_type: String,
    rendered: Option<String>,
}

impl ContentState {
    pub fn set_body(&mut self, body: Vec<u8>, content_type: String) {
        self.body = Some(body);
        self.content_type = content_type;
        if self.rendered.is_some() {
            self.render();
        }
    }

    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    fn render(&mut self) {
        let text = match &self.body {
            None => "Waiting for the response body...".to_string(),
            Some(body) => {
                let text = String::from_utf8_lossy(body).to_string();
                if self.content_type.contains("json") {
                    serde_json::from_str::<serde_json::Value>(text.as_str())
                        .ok()
                        .and_then(|value| serde_json::to_string_pretty(&value).ok())
                        .unwrap_or(text)
                } else {
                    text
                }
            }
        };
        info!("render content {} bytes", text.len());
        self.rendered = Some(text);
    }
}

/// Renders the response body into the shared state the content tab draws.
pub struct BodyRenderer {
    state: Rc<RefCell<ContentState>>,
}

impl BodyRenderer {
    pub fn new(state: Rc<RefCell<ContentState>>) -> Self {
        BodyRenderer { state }
    }
}

impl ContentRenderer for BodyRenderer {
    fn render_content(&mut self) {
        self.state.borrow_mut().render();
    }
}

#[derive(Default)]
pub struct ContentPanel {}

impl ContentPanel {
    pub fn set_and_render(&mut self, ui: &mut egui::Ui, state: &ContentState) {
        match state.rendered() {
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Nothing rendered yet");
                });
            }
            Some(text) => {
                let mut content = text;
                ui.push_id("response_body", |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(&mut content)
                                .font(egui::TextStyle::Monospace)
                                .code_editor()
                                .desired_rows(12)
                                .desired_width(f32::INFINITY),
                        );
                    });
                });
            }
        }
    }
}
