use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use strum_macros::Display;

use crate::data::cookies::Cookie;
use crate::data::http::{find_header, Header, Method, Parameter, ResourceKind};

/// Receives the change notifications of a [`Resource`]. Every callback gets
/// the resource in its current state, handlers never see a diff.
pub trait ResourceObserver {
    fn request_headers_changed(&mut self, resource: &Resource);
    fn response_headers_changed(&mut self, resource: &Resource);
    fn finished(&mut self, resource: &Resource);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum ResourceEvent {
    RequestHeadersChanged,
    ResponseHeadersChanged,
    Finished,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ObserverId(u64);

struct ObserverEntry {
    id: ObserverId,
    observer: Weak<RefCell<dyn ResourceObserver>>,
}

/// A single network resource as it is being loaded.
///
/// Setters update the raw fields, re-derive the parsed views that depend on
/// them (query string, form parameters, cookies) and then notify observers.
#[derive(Default)]
pub struct Resource {
    url: String,
    kind: ResourceKind,
    request_method: Method,
    status_code: Option<u16>,
    status_text: String,
    request_headers: Vec<Header>,
    response_headers: Vec<Header>,
    query_parameters: Option<Vec<Parameter>>,
    request_form_data: Option<String>,
    form_parameters: Option<Vec<Parameter>>,
    request_cookies: Option<Rc<Vec<Cookie>>>,
    response_cookies: Option<Rc<Vec<Cookie>>>,
    websocket_request_key3: Option<String>,
    websocket_challenge_response: Option<String>,
    finished: bool,
    observers: Vec<ObserverEntry>,
    next_observer_id: u64,
}

impl Resource {
    pub fn new(url: impl Into<String>, kind: ResourceKind) -> Self {
        let mut resource = Resource {
            kind,
            ..Default::default()
        };
        resource.set_url(url);
        resource
    }

    pub fn url(&self) -> &str {
        &self.url
    }
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
    pub fn request_method(&self) -> Method {
        self.request_method
    }
    pub fn status_code(&self) -> Option<u16> {
        self.status_code.filter(|code| *code != 0)
    }
    pub fn status_text(&self) -> &str {
        &self.status_text
    }
    pub fn request_headers(&self) -> &[Header] {
        &self.request_headers
    }
    pub fn response_headers(&self) -> &[Header] {
        &self.response_headers
    }
    pub fn sorted_request_headers(&self) -> Vec<Header> {
        Self::sorted(&self.request_headers)
    }
    pub fn sorted_response_headers(&self) -> Vec<Header> {
        Self::sorted(&self.response_headers)
    }
    pub fn query_parameters(&self) -> Option<&[Parameter]> {
        self.query_parameters.as_deref()
    }
    pub fn request_form_data(&self) -> Option<&str> {
        self.request_form_data.as_deref()
    }
    pub fn form_parameters(&self) -> Option<&[Parameter]> {
        self.form_parameters.as_deref()
    }
    pub fn request_cookies(&self) -> Option<Rc<Vec<Cookie>>> {
        self.request_cookies.clone()
    }
    pub fn response_cookies(&self) -> Option<Rc<Vec<Cookie>>> {
        self.response_cookies.clone()
    }
    pub fn websocket_request_key3(&self) -> Option<&str> {
        self.websocket_request_key3.as_deref()
    }
    pub fn websocket_challenge_response(&self) -> Option<&str> {
        self.websocket_challenge_response.as_deref()
    }
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn request_header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.request_headers, name).map(|h| h.value.as_str())
    }
    pub fn response_header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.response_headers, name).map(|h| h.value.as_str())
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.query_parameters = Self::parse_query(&self.url);
    }

    pub fn set_request_method(&mut self, method: Method) {
        self.request_method = method;
    }

    /// Payload changes travel with the request headers, so this does not
    /// notify on its own.
    pub fn set_request_form_data(&mut self, form_data: Option<String>) {
        self.request_form_data = form_data;
        self.form_parameters = self.parse_form_parameters();
    }

    pub fn set_websocket_request_key3(&mut self, key3: Option<String>) {
        self.websocket_request_key3 = key3;
    }

    pub fn set_websocket_challenge_response(&mut self, challenge_response: Option<String>) {
        self.websocket_challenge_response = challenge_response;
    }

    pub fn set_request_headers(&mut self, headers: Vec<Header>) {
        self.request_headers = headers;
        self.form_parameters = self.parse_form_parameters();
        let cookies: Vec<Cookie> = self
            .request_headers
            .iter()
            .filter(|h| h.name.eq_ignore_ascii_case("cookie"))
            .flat_map(|h| Cookie::parse_request_header(&h.value))
            .collect();
        self.request_cookies = self
            .has_request_header("cookie")
            .then(|| Rc::new(cookies));
        self.dispatch(ResourceEvent::RequestHeadersChanged);
    }

    pub fn set_response_headers(&mut self, headers: Vec<Header>) {
        self.response_headers = headers;
        let cookies: Vec<Cookie> = self
            .response_headers
            .iter()
            .filter(|h| h.name.eq_ignore_ascii_case("set-cookie"))
            .filter_map(|h| Cookie::parse_set_cookie(&h.value))
            .collect();
        self.response_cookies = find_header(&self.response_headers, "set-cookie")
            .is_some()
            .then(|| Rc::new(cookies));
        self.dispatch(ResourceEvent::ResponseHeadersChanged);
    }

    pub fn finish(&mut self, status_code: u16, status_text: impl Into<String>) {
        self.status_code = Some(status_code);
        self.status_text = status_text.into();
        self.finished = true;
        self.dispatch(ResourceEvent::Finished);
    }

    pub fn add_observer(&mut self, observer: Weak<RefCell<dyn ResourceObserver>>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push(ObserverEntry { id, observer });
        id
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|entry| entry.id != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn dispatch(&mut self, event: ResourceEvent) {
        self.observers
            .retain(|entry| entry.observer.strong_count() > 0);
        debug!(
            "{} {} to {} observers",
            self.url,
            event,
            self.observers.len()
        );
        let observers: Vec<Rc<RefCell<dyn ResourceObserver>>> = self
            .observers
            .iter()
            .filter_map(|entry| entry.observer.upgrade())
            .collect();
        for observer in observers {
            let mut observer = observer.borrow_mut();
            match event {
                ResourceEvent::RequestHeadersChanged => observer.request_headers_changed(self),
                ResourceEvent::ResponseHeadersChanged => observer.response_headers_changed(self),
                ResourceEvent::Finished => observer.finished(self),
            }
        }
    }

    fn has_request_header(&self, name: &str) -> bool {
        find_header(&self.request_headers, name).is_some()
    }

    fn parse_form_parameters(&self) -> Option<Vec<Parameter>> {
        let form_data = self.request_form_data.as_deref()?;
        let content_type = self.request_header_value("content-type")?;
        if !content_type
            .to_ascii_lowercase()
            .starts_with("application/x-www-form-urlencoded")
        {
            return None;
        }
        Some(Parameter::parse_list(form_data))
    }

    /// Query values come straight from the url text, never re-serialized.
    fn parse_query(url: &str) -> Option<Vec<Parameter>> {
        let without_fragment = url.split('#').next().unwrap_or("");
        without_fragment
            .split_once('?')
            .map(|(_, query)| Parameter::parse_list(query))
    }

    fn sorted(headers: &[Header]) -> Vec<Header> {
        let mut sorted = headers.to_vec();
        sorted.sort_by_key(|h| h.name.to_ascii_lowercase());
        sorted
    }
}
