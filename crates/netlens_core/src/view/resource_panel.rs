use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};
use strum_macros::{Display, EnumIter, EnumString};

use crate::data::http::{Header, Parameter, StatusTier};
use crate::data::resource::{ObserverId, Resource, ResourceObserver};
use crate::preferences::{SharedPreferences, RESOURCE_VIEW_TAB};
use crate::utils::display_parameter_value;
use crate::view::cookies_table::CookiesView;
use crate::view::outline::{HeadersOutline, OutlineRow, OutlineSection, StatusLine, DECODE_HOVER};
use crate::view::tabbed_pane::{Surface, TabContainer, TabContent, TabView};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceTab {
    Headers,
    Content,
    Cookies,
}

/// Draws the body of a resource. Only panels built with a renderer get a
/// content tab.
pub trait ContentRenderer {
    fn render_content(&mut self);
}

/// Inspector for one resource: a headers tab, an optional content tab and a
/// cookies tab that shows up once the resource carries cookies.
pub struct ResourcePanel {
    tabbed_pane: TabContainer<ResourceTab>,
    outline: HeadersOutline,
    cookies_view: Option<Rc<RefCell<CookiesView>>>,
    content_renderer: Option<Box<dyn ContentRenderer>>,
    preferences: SharedPreferences,
    decode_request_parameters: bool,
    headers_visible: bool,
    content_selected: bool,
    observer_id: Option<ObserverId>,
}

impl ResourcePanel {
    pub fn new(
        resource: &Resource,
        preferences: SharedPreferences,
        content_renderer: Option<Box<dyn ContentRenderer>>,
    ) -> Self {
        let mut tabbed_pane = TabContainer::default();
        let mut tabs = vec![(ResourceTab::Headers, "Headers")];
        if content_renderer.is_some() {
            tabs.push((ResourceTab::Content, "Content"));
        }
        for (tab, title) in tabs {
            if let Err(err) = tabbed_pane.append_tab(
                tab.to_string(),
                title,
                TabContent::Surface(Surface::default()),
                tab,
            ) {
                warn!("{}", err);
            }
        }
        let mut panel = ResourcePanel {
            tabbed_pane,
            outline: HeadersOutline::default(),
            cookies_view: None,
            content_renderer,
            preferences,
            decode_request_parameters: true,
            headers_visible: true,
            content_selected: false,
            observer_id: None,
        };
        panel.refresh_url(resource);
        panel.refresh_query_string(resource);
        panel.refresh_request_headers(resource);
        panel.refresh_response_headers(resource);
        panel.refresh_http_information(resource);
        panel.select_tab(None);
        panel
    }

    /// Builds a panel and registers it for the resource's notifications.
    pub fn attach(
        resource: &mut Resource,
        preferences: SharedPreferences,
        content_renderer: Option<Box<dyn ContentRenderer>>,
    ) -> Rc<RefCell<ResourcePanel>> {
        let panel = Rc::new(RefCell::new(ResourcePanel::new(
            resource,
            preferences,
            content_renderer,
        )));
        let observer: Rc<RefCell<dyn ResourceObserver>> = panel.clone();
        let id = resource.add_observer(Rc::downgrade(&observer));
        panel.borrow_mut().observer_id = Some(id);
        panel
    }

    pub fn detach(&mut self, resource: &mut Resource) {
        if let Some(id) = self.observer_id.take() {
            resource.remove_observer(id);
        }
    }

    pub fn outline(&self) -> &HeadersOutline {
        &self.outline
    }

    pub fn tabbed_pane(&self) -> &TabContainer<ResourceTab> {
        &self.tabbed_pane
    }

    pub fn cookies_view(&self) -> Option<Rc<RefCell<CookiesView>>> {
        self.cookies_view.clone()
    }

    pub fn selected_tab(&self) -> Option<ResourceTab> {
        self.tabbed_pane
            .selected_tab_id()
            .and_then(|id| ResourceTab::from_str(id).ok())
    }

    pub fn decode_request_parameters(&self) -> bool {
        self.decode_request_parameters
    }

    pub fn has_content_tab(&self) -> bool {
        self.content_renderer.is_some()
    }

    pub fn headers_visible(&self) -> bool {
        self.headers_visible
    }

    pub fn set_headers_visible(&mut self, visible: bool) {
        if visible == self.headers_visible {
            return;
        }
        self.headers_visible = visible;
        self.select_tab(None);
    }

    pub fn show(&mut self) {
        self.select_tab(None);
    }

    pub fn resize(&mut self) {
        if let Some(view) = &self.cookies_view {
            let mut view = view.borrow_mut();
            if view.is_visible() {
                view.resize();
            }
        }
    }

    pub fn select_content_tab(&mut self) {
        self.select_tab(Some(&ResourceTab::Content.to_string()));
    }

    /// Runs the click handler of the tab header named `id`.
    pub fn click_tab(&mut self, id: &str) {
        if let Some(tab) = self.tabbed_pane.click(id) {
            self.select_tab(Some(&tab.to_string()));
        }
    }

    /// With an explicit tab, selects it and remembers it as the preferred
    /// tab. Without one, picks the content tab, or when headers are visible
    /// the preferred tab if this panel has it and the headers tab otherwise.
    pub fn select_tab(&mut self, tab: Option<&str>) {
        let tab = match tab {
            Some(tab) => {
                self.preferences.borrow_mut().set(RESOURCE_VIEW_TAB, tab);
                tab.to_string()
            }
            None => {
                let mut tab = ResourceTab::Content.to_string();
                if self.headers_visible {
                    let preferred = self.preferences.borrow().get(RESOURCE_VIEW_TAB);
                    tab = match preferred {
                        Some(preferred) if self.tabbed_pane.has_tab(&preferred) => preferred,
                        _ => ResourceTab::Headers.to_string(),
                    };
                }
                tab
            }
        };
        debug!("select tab {}", tab);
        self.tabbed_pane.select_tab_by_id(&tab);
        let content = tab == ResourceTab::Content.to_string() && self.has_content_tab();
        if content && !self.content_selected {
            if let Some(renderer) = self.content_renderer.as_mut() {
                renderer.render_content();
            }
        }
        self.content_selected = content;
    }

    /// Double-click on any parameter row: flips decoding for both parameter
    /// sections at once.
    pub fn toggle_url_decoding(&mut self, resource: &Resource) {
        self.decode_request_parameters = !self.decode_request_parameters;
        self.refresh_query_string(resource);
        self.refresh_form_data(resource);
    }

    fn refresh_url(&mut self, resource: &Resource) {
        self.outline.url = OutlineRow::new("Request URL", resource.url());
    }

    fn refresh_query_string(&mut self, resource: &Resource) {
        let section = &mut self.outline.query_string;
        match resource.query_parameters() {
            Some(parameters) => {
                section.hidden = false;
                Self::refresh_parms(section, parameters, self.decode_request_parameters);
            }
            None => section.hidden = true,
        }
    }

    fn refresh_form_data(&mut self, resource: &Resource) {
        self.outline.form_data.hidden = true;
        self.outline.request_payload.hidden = true;

        let form_data = match resource.request_form_data() {
            Some(form_data) if !form_data.is_empty() => form_data,
            _ => return,
        };
        match resource.form_parameters() {
            Some(parameters) => {
                let section = &mut self.outline.form_data;
                section.hidden = false;
                Self::refresh_parms(section, parameters, self.decode_request_parameters);
            }
            None => {
                let section = &mut self.outline.request_payload;
                section.hidden = false;
                section.remove_children();
                section.rows.push(OutlineRow::new("", form_data));
            }
        }
    }

    fn refresh_parms(section: &mut OutlineSection, parameters: &[Parameter], decode: bool) {
        section.remove_children();
        section.count = Some(parameters.len());
        for parameter in parameters {
            let value = display_parameter_value(&parameter.value, decode);
            section.rows.push(OutlineRow {
                name: parameter.name.clone(),
                value: value.text,
                decode_error: value.decode_failed,
                tooltip: Some(DECODE_HOVER.to_string()),
                toggles_decoding: true,
            });
        }
    }

    fn refresh_request_headers(&mut self, resource: &Resource) {
        let additional_row = resource
            .websocket_request_key3()
            .map(|key3| OutlineRow::new("(Key3)", key3));
        Self::refresh_headers(
            &mut self.outline.request_headers,
            &resource.sorted_request_headers(),
            additional_row,
        );
        self.refresh_form_data(resource);
        self.refresh_cookies(resource);
    }

    fn refresh_response_headers(&mut self, resource: &Resource) {
        let additional_row = resource
            .websocket_challenge_response()
            .map(|response| OutlineRow::new("(Challenge Response)", response));
        Self::refresh_headers(
            &mut self.outline.response_headers,
            &resource.sorted_response_headers(),
            additional_row,
        );
        self.refresh_cookies(resource);
    }

    fn refresh_headers(
        section: &mut OutlineSection,
        headers: &[Header],
        additional_row: Option<OutlineRow>,
    ) {
        section.remove_children();
        section.count = Some(headers.len());
        section.hidden = headers.is_empty();
        for header in headers {
            section
                .rows
                .push(OutlineRow::new(header.name.clone(), header.value.clone()));
        }
        if let Some(row) = additional_row {
            section.rows.push(row);
        }
    }

    fn refresh_http_information(&mut self, resource: &Resource) {
        match resource.status_code() {
            Some(code) => {
                self.outline.request_method = Some(OutlineRow::new(
                    "Request Method",
                    resource.request_method().to_string(),
                ));
                self.outline.status = Some(StatusLine {
                    code,
                    text: resource.status_text().to_string(),
                    tier: StatusTier::from_code(code),
                });
            }
            None => {
                self.outline.request_method = None;
                self.outline.status = None;
            }
        }
    }

    fn refresh_cookies(&mut self, resource: &Resource) {
        if self.cookies_view.is_none() {
            if resource.request_cookies().is_none() && resource.response_cookies().is_none() {
                return;
            }
            let view = Rc::new(RefCell::new(CookiesView::default()));
            let content: Rc<RefCell<dyn TabView>> = view.clone();
            if let Err(err) = self.tabbed_pane.append_tab(
                ResourceTab::Cookies.to_string(),
                "Cookies",
                TabContent::View(content),
                ResourceTab::Cookies,
            ) {
                warn!("{}", err);
            }
            self.cookies_view = Some(view);
        }
        if let Some(view) = &self.cookies_view {
            let mut view = view.borrow_mut();
            view.set_request_cookies(resource.request_cookies());
            view.set_response_cookies(resource.response_cookies());
        }
    }
}

impl ResourceObserver for ResourcePanel {
    fn request_headers_changed(&mut self, resource: &Resource) {
        debug!("request headers changed: {}", resource.url());
        self.refresh_request_headers(resource);
    }

    fn response_headers_changed(&mut self, resource: &Resource) {
        debug!("response headers changed: {}", resource.url());
        self.refresh_response_headers(resource);
    }

    fn finished(&mut self, resource: &Resource) {
        debug!("finished: {}", resource.url());
        self.refresh_http_information(resource);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::data::http::{Method, ResourceKind};
    use crate::preferences::{MemoryPreferences, PreferenceStore};
    use crate::view::outline::DECODE_ERROR;

    struct CountingRenderer(Rc<Cell<usize>>);

    impl ContentRenderer for CountingRenderer {
        fn render_content(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn preferences() -> Rc<RefCell<MemoryPreferences>> {
        MemoryPreferences::shared()
    }

    fn panel_for(resource: &mut Resource) -> Rc<RefCell<ResourcePanel>> {
        ResourcePanel::attach(resource, preferences(), None)
    }

    fn values(section: &OutlineSection) -> Vec<String> {
        section.rows.iter().map(|row| row.value.clone()).collect()
    }

    fn form_resource(form: &str) -> Resource {
        let mut resource = Resource::new("http://example.com/post?q=a%2Bb+c", ResourceKind::XHR);
        resource.set_request_form_data(Some(form.to_string()));
        resource
    }

    #[test]
    fn empty_query_is_shown_with_zero_count() {
        let mut resource = Resource::new("http://example.com/?", ResourceKind::XHR);
        let panel = panel_for(&mut resource);
        let panel = panel.borrow();
        let section = &panel.outline().query_string;
        assert!(!section.hidden);
        assert_eq!(section.heading(), "Query String Parameters (0)");
        assert!(section.rows.is_empty());

        let mut resource = Resource::new("http://example.com/", ResourceKind::XHR);
        let panel = panel_for(&mut resource);
        assert!(panel.borrow().outline().query_string.hidden);
    }

    #[test]
    fn query_rows_are_decoded() {
        let mut resource = Resource::new("http://example.com/?v=a%2Bb+c&p=100%", ResourceKind::XHR);
        let panel = panel_for(&mut resource);
        let panel = panel.borrow();
        let section = &panel.outline().query_string;
        assert_eq!(section.count, Some(2));
        assert_eq!(values(section), vec!["a b c", "100%"]);
        assert!(!section.rows[0].decode_error);
        assert!(section.rows[1].decode_error);
        assert!(section.rows.iter().all(|row| row.toggles_decoding));
        assert_eq!(section.rows[0].tooltip.as_deref(), Some(DECODE_HOVER));
        assert_eq!(DECODE_ERROR, "(unable to decode value)");
    }

    #[test]
    fn undecoded_query_matches_the_url() {
        let mut resource = Resource::new("http://example.com/?name=Jörg M&q=it's", ResourceKind::XHR);
        let panel = panel_for(&mut resource);
        panel.borrow_mut().toggle_url_decoding(&resource);
        let panel = panel.borrow();
        assert!(!panel.decode_request_parameters());
        assert_eq!(values(&panel.outline().query_string), vec!["Jörg M", "it's"]);
    }

    #[test]
    fn toggling_decoding_rebuilds_both_parameter_sections() {
        let mut resource = form_resource("name=J%C3%B6rg+M");
        resource.set_request_headers(vec![Header::new(
            "Content-Type",
            "application/x-www-form-urlencoded",
        )]);
        let panel = panel_for(&mut resource);
        {
            let panel = panel.borrow();
            assert_eq!(values(&panel.outline().query_string), vec!["a b c"]);
            assert_eq!(values(&panel.outline().form_data), vec!["Jörg M"]);
        }

        panel.borrow_mut().toggle_url_decoding(&resource);
        {
            let panel = panel.borrow();
            assert!(!panel.decode_request_parameters());
            assert_eq!(values(&panel.outline().query_string), vec!["a%2Bb+c"]);
            assert_eq!(values(&panel.outline().form_data), vec!["J%C3%B6rg+M"]);
        }

        panel.borrow_mut().toggle_url_decoding(&resource);
        assert_eq!(values(&panel.borrow().outline().form_data), vec!["Jörg M"]);
    }

    #[test]
    fn form_data_or_payload_never_both() {
        let mut resource = form_resource("{\"a\":1}");
        let panel = panel_for(&mut resource);
        {
            let panel = panel.borrow();
            assert!(panel.outline().form_data.hidden);
            assert!(!panel.outline().request_payload.hidden);
            assert_eq!(values(&panel.outline().request_payload), vec!["{\"a\":1}"]);
        }

        resource.set_request_form_data(Some("a=1&b=2".to_string()));
        resource.set_request_headers(vec![Header::new(
            "content-type",
            "application/x-www-form-urlencoded",
        )]);
        let panel = panel.borrow();
        assert!(!panel.outline().form_data.hidden);
        assert!(panel.outline().request_payload.hidden);
        assert_eq!(panel.outline().form_data.heading(), "Form Data (2)");
    }

    #[test]
    fn no_form_data_hides_both_sections() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::XHR);
        let panel = panel_for(&mut resource);
        let panel = panel.borrow();
        assert!(panel.outline().form_data.hidden);
        assert!(panel.outline().request_payload.hidden);
    }

    #[test]
    fn header_sections_count_and_hide() {
        let mut resource = Resource::new("ws://example.com/socket", ResourceKind::WebSocket);
        resource.set_websocket_request_key3(Some("abcdefgh".to_string()));
        let panel = panel_for(&mut resource);
        {
            let panel = panel.borrow();
            let section = &panel.outline().request_headers;
            assert!(section.hidden);
            assert_eq!(section.heading(), "Request Headers (0)");
            assert_eq!(section.rows.len(), 1);
        }

        resource.set_request_headers(vec![
            Header::new("Upgrade", "websocket"),
            Header::new("Host", "example.com"),
        ]);
        resource.set_websocket_challenge_response(Some("xyz".to_string()));
        resource.set_response_headers(vec![Header::new("Connection", "Upgrade")]);

        let panel = panel.borrow();
        let request = &panel.outline().request_headers;
        assert!(!request.hidden);
        assert_eq!(request.heading(), "Request Headers (2)");
        let names: Vec<&str> = request.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Host", "Upgrade", "(Key3)"]);

        let response = &panel.outline().response_headers;
        assert_eq!(response.rows.len(), 2);
        assert_eq!(response.rows[1].name, "(Challenge Response)");
        assert_eq!(response.rows[1].value, "xyz");
    }

    #[test]
    fn request_headers_cascade_into_form_data() {
        let mut resource = form_resource("a=1");
        let panel = panel_for(&mut resource);
        assert!(panel.borrow().outline().form_data.hidden);

        resource.set_request_headers(vec![Header::new(
            "Content-Type",
            "application/x-www-form-urlencoded",
        )]);
        assert!(!panel.borrow().outline().form_data.hidden);
    }

    #[test]
    fn status_rows_appear_when_finished() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        resource.set_request_method(Method::POST);
        let panel = panel_for(&mut resource);
        assert!(panel.borrow().outline().status.is_none());
        assert!(panel.borrow().outline().request_method.is_none());

        resource.finish(302, "Found");
        let panel = panel.borrow();
        let status = panel.outline().status.clone().unwrap();
        assert_eq!(status.label(), "302 Found");
        assert_eq!(status.tier, StatusTier::Redirect);
        assert_eq!(
            panel.outline().request_method.as_ref().map(|r| r.value.as_str()),
            Some("POST")
        );
    }

    #[test]
    fn unknown_status_keeps_rows_hidden() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        let panel = panel_for(&mut resource);
        resource.finish(0, "");
        assert!(panel.borrow().outline().status.is_none());
    }

    #[test]
    fn cookies_tab_appears_once_and_stays() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        let panel = panel_for(&mut resource);
        resource.set_request_headers(vec![Header::new("Accept", "*/*")]);
        assert!(!panel.borrow().tabbed_pane().has_tab("cookies"));
        assert!(panel.borrow().cookies_view().is_none());

        resource.set_response_headers(vec![Header::new("Set-Cookie", "sid=1; Path=/")]);
        assert!(panel.borrow().tabbed_pane().has_tab("cookies"));
        let view = panel.borrow().cookies_view().unwrap();
        assert_eq!(view.borrow().response_group().cookies().len(), 1);

        resource.set_response_headers(vec![]);
        assert!(panel.borrow().tabbed_pane().has_tab("cookies"));
        assert!(view.borrow().response_group().cookies().is_empty());
        assert_eq!(panel.borrow().tabbed_pane().tabs().count(), 2);
    }

    #[test]
    fn cookie_group_totals_follow_headers() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        let panel = panel_for(&mut resource);
        resource.set_request_headers(vec![Header::new("Cookie", "a=1; bb=22")]);
        let view = panel.borrow().cookies_view().unwrap();
        assert_eq!(view.borrow().request_group().total_size(), 3 + 5);

        let revision = view.borrow().request_group().revision();
        resource.set_response_headers(vec![Header::new("Set-Cookie", "c=3")]);
        assert_eq!(view.borrow().request_group().revision(), revision);
        assert_eq!(view.borrow().response_group().total_size(), 3);
    }

    #[test]
    fn explicit_selection_is_remembered() {
        let prefs = preferences();
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        resource.set_request_headers(vec![Header::new("Cookie", "a=1")]);
        let panel = ResourcePanel::attach(&mut resource, prefs.clone(), None);
        assert_eq!(panel.borrow().selected_tab(), Some(ResourceTab::Headers));

        panel.borrow_mut().click_tab("cookies");
        assert_eq!(panel.borrow().selected_tab(), Some(ResourceTab::Cookies));
        assert_eq!(prefs.borrow().get(RESOURCE_VIEW_TAB).as_deref(), Some("cookies"));

        let mut with_cookies = Resource::new("http://example.com/a", ResourceKind::Document);
        with_cookies.set_request_headers(vec![Header::new("Cookie", "b=2")]);
        let second = ResourcePanel::attach(&mut with_cookies, prefs.clone(), None);
        assert_eq!(second.borrow().selected_tab(), Some(ResourceTab::Cookies));

        let mut without_cookies = Resource::new("http://example.com/b", ResourceKind::Document);
        let third = ResourcePanel::attach(&mut without_cookies, prefs.clone(), None);
        assert_eq!(third.borrow().selected_tab(), Some(ResourceTab::Headers));
        assert_eq!(prefs.borrow().get(RESOURCE_VIEW_TAB).as_deref(), Some("cookies"));
    }

    #[test]
    fn hidden_headers_default_to_content() {
        let rendered = Rc::new(Cell::new(0));
        let prefs = preferences();
        prefs.borrow_mut().set(RESOURCE_VIEW_TAB, "headers");
        let mut resource = Resource::new("http://example.com/app.js", ResourceKind::Script);
        let panel = ResourcePanel::attach(
            &mut resource,
            prefs,
            Some(Box::new(CountingRenderer(rendered.clone()))),
        );
        assert_eq!(panel.borrow().selected_tab(), Some(ResourceTab::Headers));
        assert_eq!(rendered.get(), 0);

        panel.borrow_mut().set_headers_visible(false);
        assert_eq!(panel.borrow().selected_tab(), Some(ResourceTab::Content));
        assert_eq!(rendered.get(), 1);

        panel.borrow_mut().set_headers_visible(false);
        panel.borrow_mut().show();
        assert_eq!(rendered.get(), 1);
    }

    #[test]
    fn content_renders_once_per_transition() {
        let rendered = Rc::new(Cell::new(0));
        let mut resource = Resource::new("http://example.com/app.js", ResourceKind::Script);
        let panel = ResourcePanel::attach(
            &mut resource,
            preferences(),
            Some(Box::new(CountingRenderer(rendered.clone()))),
        );
        let mut panel = panel.borrow_mut();
        assert!(panel.has_content_tab());

        panel.select_content_tab();
        panel.select_content_tab();
        assert_eq!(rendered.get(), 1);

        panel.click_tab("headers");
        panel.click_tab("content");
        assert_eq!(rendered.get(), 2);
    }

    #[test]
    fn default_selection_without_content_tab_hides_all() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Other);
        let panel = panel_for(&mut resource);
        panel.borrow_mut().set_headers_visible(false);
        assert_eq!(panel.borrow().selected_tab(), None);
        assert!(panel.borrow().tabbed_pane().tabs().all(|tab| !tab.is_visible()));
    }

    #[test]
    fn resize_only_lays_out_visible_cookies() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        resource.set_request_headers(vec![Header::new("Cookie", "a=1")]);
        let panel = panel_for(&mut resource);
        let view = panel.borrow().cookies_view().unwrap();

        panel.borrow_mut().resize();
        assert_eq!(view.borrow().layout_revision(), 0);

        panel.borrow_mut().click_tab("cookies");
        assert_eq!(view.borrow().layout_revision(), 1);
        panel.borrow_mut().resize();
        assert_eq!(view.borrow().layout_revision(), 2);
    }

    #[test]
    fn notifications_in_any_order_read_current_state() {
        let mut resource = form_resource("a=1&b=2");
        resource.set_request_method(Method::PUT);
        let panel = panel_for(&mut resource);

        resource.finish(404, "Not Found");
        {
            let panel = panel.borrow();
            let status = panel.outline().status.clone().unwrap();
            assert_eq!(status.tier, StatusTier::Error);
            assert_eq!(status.label(), "404 Not Found");
            assert!(panel.outline().response_headers.hidden);
            assert!(!panel.tabbed_pane().has_tab("cookies"));
        }

        resource.set_response_headers(vec![Header::new("Set-Cookie", "sid=1; Path=/")]);
        {
            let panel = panel.borrow();
            assert!(panel.tabbed_pane().has_tab("cookies"));
            assert_eq!(panel.outline().response_headers.heading(), "Response Headers (1)");
            assert!(panel.outline().form_data.hidden);
            assert!(!panel.outline().request_payload.hidden);
        }

        resource.set_request_headers(vec![
            Header::new("Content-Type", "application/x-www-form-urlencoded"),
            Header::new("Cookie", "a=1"),
        ]);
        let panel = panel.borrow();
        assert_eq!(panel.outline().request_headers.heading(), "Request Headers (2)");
        assert_eq!(panel.outline().form_data.heading(), "Form Data (2)");
        assert!(panel.outline().request_payload.hidden);
        let view = panel.cookies_view().unwrap();
        assert_eq!(view.borrow().request_group().cookies().len(), 1);
        assert_eq!(view.borrow().response_group().cookies().len(), 1);
        assert_eq!(
            panel.outline().status.as_ref().map(|s| s.tier),
            Some(StatusTier::Error)
        );
        assert_eq!(
            panel.outline().request_method.as_ref().map(|r| r.value.as_str()),
            Some("PUT")
        );
    }

    #[test]
    fn headers_update_without_ever_finishing() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::XHR);
        let panel = panel_for(&mut resource);

        resource.set_response_headers(vec![Header::new("Server", "test")]);
        resource.set_request_headers(vec![Header::new("Accept", "*/*")]);
        resource.set_response_headers(vec![
            Header::new("Server", "test"),
            Header::new("Content-Length", "0"),
        ]);

        let panel = panel.borrow();
        assert_eq!(panel.outline().request_headers.heading(), "Request Headers (1)");
        assert_eq!(panel.outline().response_headers.heading(), "Response Headers (2)");
        assert!(!panel.outline().response_headers.hidden);
        assert!(panel.outline().status.is_none());
        assert!(panel.outline().request_method.is_none());
    }

    #[test]
    fn detached_panel_stops_refreshing() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        let panel = panel_for(&mut resource);
        assert_eq!(resource.observer_count(), 1);

        panel.borrow_mut().detach(&mut resource);
        assert_eq!(resource.observer_count(), 0);
        resource.finish(200, "OK");
        assert!(panel.borrow().outline().status.is_none());
    }

    #[test]
    fn dropped_panel_is_pruned() {
        let mut resource = Resource::new("http://example.com/", ResourceKind::Document);
        drop(panel_for(&mut resource));
        resource.finish(200, "OK");
        assert_eq!(resource.observer_count(), 0);
    }
}
