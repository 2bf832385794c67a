use egui::{CollapsingHeader, Label, RichText, Sense, Ui};

use netlens_core::view::outline::{HeadersOutline, OutlineRow, StatusLine, DECODE_ERROR};

use crate::utils;

#[derive(Default)]
pub struct HeadersPanel {}

impl HeadersPanel {
    /// Returns true when a parameter row was double-clicked.
    pub fn set_and_render(&mut self, ui: &mut Ui, outline: &HeadersOutline) -> bool {
        let mut toggle_decoding = false;
        egui::ScrollArea::vertical()
            .id_source("headers_outline")
            .show(ui, |ui| {
                Self::render_row(ui, &outline.url);
                if let Some(row) = &outline.request_method {
                    Self::render_row(ui, row);
                }
                if let Some(status) = &outline.status {
                    Self::render_status(ui, status);
                }
                for section in outline.sections() {
                    if section.hidden {
                        continue;
                    }
                    CollapsingHeader::new(RichText::new(section.heading()).strong())
                        .id_source(section.title.as_str())
                        .default_open(section.expanded)
                        .show(ui, |ui| {
                            for row in section.rows.iter() {
                                let response = Self::render_row(ui, row);
                                if row.toggles_decoding && response.double_clicked() {
                                    toggle_decoding = true;
                                }
                            }
                        });
                }
            });
        toggle_decoding
    }

    fn render_status(ui: &mut Ui, status: &StatusLine) {
        ui.horizontal(|ui| {
            ui.strong("Status Code:");
            ui.label(RichText::new("●").color(utils::status_color(status.tier)))
                .on_hover_text(status.label());
            ui.monospace(status.label());
        });
    }

    fn render_row(ui: &mut Ui, row: &OutlineRow) -> egui::Response {
        ui.horizontal_wrapped(|ui| {
            if !row.name.is_empty() {
                ui.strong(format!("{}:", row.name));
            }
            let mut response =
                ui.add(Label::new(RichText::new(row.value.as_str()).monospace()).sense(Sense::click()));
            if row.decode_error {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, DECODE_ERROR);
            }
            if let Some(tooltip) = &row.tooltip {
                response = response.on_hover_text(tooltip.as_str());
            }
            response
        })
        .inner
    }
}
