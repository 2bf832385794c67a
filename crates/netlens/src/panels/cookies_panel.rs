use eframe::emath::Align;
use egui::{Layout, Ui};
use egui_extras::{Column, TableBuilder};

use netlens_core::view::cookies_table::{cookie_cells, CookiesView, COLUMNS};

const CHAR_WIDTH: f32 = 7.0;

#[derive(Default)]
pub struct CookiesPanel {}

impl CookiesPanel {
    pub fn set_and_render(&mut self, ui: &mut Ui, cookies_view: &CookiesView) {
        let widths = cookies_view.column_widths();
        ui.push_id("cookies_table", |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(Layout::left_to_right(Align::Center));
            for width in widths.iter() {
                table = table.column(Column::initial(*width as f32 * CHAR_WIDTH).clip(true));
            }
            table
                .header(20.0, |mut header| {
                    for title in COLUMNS {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for group in cookies_view.groups() {
                        body.row(18.0, |mut row| {
                            for (index, cell) in group.folder_cells().iter().enumerate() {
                                row.col(|ui| {
                                    if index == 0 {
                                        ui.strong(cell.as_str());
                                    } else {
                                        ui.label(cell.as_str());
                                    }
                                });
                            }
                        });
                        if !group.expanded {
                            continue;
                        }
                        for cookie in group.cookies() {
                            body.row(18.0, |mut row| {
                                for cell in cookie_cells(cookie).iter() {
                                    row.col(|ui| {
                                        ui.label(cell.as_str());
                                    });
                                }
                            });
                        }
                    }
                });
        });
    }
}
