use std::cell::RefCell;
use std::rc::Rc;

use egui::Ui;

use netlens_core::data::resource::Resource;
use netlens_core::view::resource_panel::{ResourcePanel, ResourceTab};

use crate::panels::content_panel::{ContentPanel, ContentState};
use crate::panels::cookies_panel::CookiesPanel;
use crate::panels::headers_panel::HeadersPanel;
use crate::utils;
use crate::utils::HighlightValue;

#[derive(Default)]
pub struct ResourcePanelView {
    headers_panel: HeadersPanel,
    cookies_panel: CookiesPanel,
    content_panel: ContentPanel,
    last_width: Option<f32>,
}

impl ResourcePanelView {
    pub fn set_and_render(
        &mut self,
        ui: &mut Ui,
        panel: &Rc<RefCell<ResourcePanel>>,
        resource: &Resource,
        content_state: &Rc<RefCell<ContentState>>,
    ) {
        let width = ui.available_width();
        if self.last_width != Some(width) {
            self.last_width = Some(width);
            panel.borrow_mut().resize();
        }

        let mut clicked_tab = None;
        let mut toggle_decoding = false;
        {
            let view = panel.borrow();
            ui.horizontal(|ui| {
                for tab in view.tabbed_pane().tabs() {
                    let count = Self::get_count(&view, tab.id());
                    let header =
                        utils::build_with_count_ui_header(tab.title().to_string(), count, ui);
                    if ui.selectable_label(tab.is_selected(), header).clicked() {
                        clicked_tab = Some(tab.id().to_string());
                    }
                }
            });
            ui.separator();
            match view.selected_tab() {
                Some(ResourceTab::Headers) => {
                    toggle_decoding = self.headers_panel.set_and_render(ui, view.outline());
                }
                Some(ResourceTab::Content) => {
                    self.content_panel
                        .set_and_render(ui, &content_state.borrow());
                }
                Some(ResourceTab::Cookies) => {
                    if let Some(cookies_view) = view.cookies_view() {
                        self.cookies_panel
                            .set_and_render(ui, &cookies_view.borrow());
                    }
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Pick a tab");
                    });
                }
            }
        }
        if let Some(id) = clicked_tab {
            panel.borrow_mut().click_tab(id.as_str());
        }
        if toggle_decoding {
            panel.borrow_mut().toggle_url_decoding(resource);
        }
    }

    fn get_count(view: &ResourcePanel, tab_id: &str) -> HighlightValue {
        match tab_id.parse::<ResourceTab>() {
            Ok(ResourceTab::Headers) => {
                let outline = view.outline();
                HighlightValue::Usize(
                    outline.request_headers.count.unwrap_or(0)
                        + outline.response_headers.count.unwrap_or(0),
                )
            }
            Ok(ResourceTab::Cookies) => match view.cookies_view() {
                Some(cookies_view) => {
                    let cookies_view = cookies_view.borrow();
                    HighlightValue::Usize(
                        cookies_view
                            .groups()
                            .iter()
                            .map(|group| group.cookies().len())
                            .sum(),
                    )
                }
                None => HighlightValue::None,
            },
            _ => HighlightValue::None,
        }
    }
}
