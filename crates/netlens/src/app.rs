use std::cell::RefCell;
use std::rc::Rc;

use egui::Context;
use log::{error, info};
use poll_promise::Promise;

use netlens_core::data::http::{Header, ResourceKind};
use netlens_core::data::resource::Resource;
use netlens_core::view::resource_panel::{ContentRenderer, ResourcePanel};

use crate::data::config_data::ConfigData;
use crate::operation::rest_sender::{Exchange, RestSender};
use crate::panels::content_panel::{BodyRenderer, ContentState};
use crate::panels::resource_panel::ResourcePanelView;
use crate::panels::top_panel::TopPanel;

pub struct App {
    config_data: Rc<RefCell<ConfigData>>,
    top_panel: TopPanel,
    resource: Option<Resource>,
    resource_panel: Option<Rc<RefCell<ResourcePanel>>>,
    resource_panel_view: ResourcePanelView,
    content_state: Rc<RefCell<ContentState>>,
    send_promise: Option<Promise<Result<Exchange, String>>>,
    headers_visible: bool,
    elapsed_time: Option<u128>,
    last_error: Option<String>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.style_mut(|s| {
            s.spacing.item_spacing.x = 7.0;
            s.spacing.item_spacing.y = 7.0;
        });
        let config_data = ConfigData::load();
        let top_panel = TopPanel::new(
            config_data.last_method(),
            config_data.last_url(),
            config_data.last_body(),
        );
        App {
            config_data: Rc::new(RefCell::new(config_data)),
            top_panel,
            resource: None,
            resource_panel: None,
            resource_panel_view: Default::default(),
            content_state: Default::default(),
            send_promise: None,
            headers_visible: true,
            elapsed_time: None,
            last_error: None,
        }
    }

    fn send(&mut self) {
        let method = self.top_panel.method;
        let url = self.top_panel.url.trim().to_string();
        let body = self.top_panel.body.clone();
        if let Err(err) = url::Url::parse(url.as_str()) {
            self.last_error = Some(format!("Invalid URL: {}", err));
            return;
        }
        self.last_error = None;
        self.elapsed_time = None;
        self.config_data
            .borrow_mut()
            .set_last_request(method, url.clone(), body.clone());

        if let (Some(resource), Some(panel)) = (self.resource.as_mut(), self.resource_panel.take()) {
            panel.borrow_mut().detach(resource);
        }

        let mut resource = Resource::new(url.clone(), ResourceKind::XHR);
        resource.set_request_method(method);
        resource.set_request_form_data((!body.is_empty()).then(|| body.clone()));

        self.content_state = Default::default();
        let renderer = resource.kind().has_content_view().then(|| {
            Box::new(BodyRenderer::new(self.content_state.clone())) as Box<dyn ContentRenderer>
        });
        let panel = ResourcePanel::attach(&mut resource, self.config_data.clone(), renderer);
        panel.borrow_mut().set_headers_visible(self.headers_visible);

        let headers = RestSender::request_headers(body.as_str());
        resource.set_request_headers(headers.clone());
        info!("send {} {}", method, url);
        self.send_promise = Some(RestSender::send(method, url, body, headers));
        self.resource = Some(resource);
        self.resource_panel = Some(panel);
    }

    fn poll_exchange(&mut self, ctx: &Context) {
        let Some(promise) = self.send_promise.take() else {
            return;
        };
        match promise.try_take() {
            Ok(result) => self.apply_exchange(result),
            Err(promise) => {
                self.send_promise = Some(promise);
                ctx.request_repaint();
            }
        }
    }

    fn apply_exchange(&mut self, result: Result<Exchange, String>) {
        let Some(resource) = self.resource.as_mut() else {
            return;
        };
        match result {
            Ok(exchange) => {
                self.elapsed_time = Some(exchange.elapsed_time);
                resource.set_request_headers(exchange.request_headers);
                let content_type = exchange
                    .response_headers
                    .iter()
                    .find(|h: &&Header| h.name.eq_ignore_ascii_case("content-type"))
                    .map(|h| h.value.clone())
                    .unwrap_or_default();
                self.content_state
                    .borrow_mut()
                    .set_body(exchange.body, content_type);
                resource.set_response_headers(exchange.response_headers);
                resource.finish(exchange.status, exchange.status_text);
            }
            Err(err) => {
                error!("send {} failed: {}", resource.url(), err);
                self.last_error = Some(err);
                resource.finish(0, "");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_exchange(ctx);
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            let sending = self.send_promise.is_some();
            let mut headers_visible = self.headers_visible;
            if self.top_panel.render(ui, sending, &mut headers_visible) {
                self.send();
            }
            if headers_visible != self.headers_visible {
                self.headers_visible = headers_visible;
                if let Some(panel) = &self.resource_panel {
                    panel.borrow_mut().set_headers_visible(headers_visible);
                }
            }
            if let Some(elapsed_time) = self.elapsed_time {
                ui.label(format!("Time: {}ms", elapsed_time));
            }
            if let Some(err) = &self.last_error {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, err.as_str());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match (&self.resource, &self.resource_panel) {
                (Some(resource), Some(panel)) => {
                    self.resource_panel_view
                        .set_and_render(ui, panel, resource, &self.content_state);
                }
                _ => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Hit the Send button to get a response");
                    });
                }
            }
        });
    }
}
