use crate::data::http::StatusTier;

pub const DECODE_HOVER: &str = "Double-Click to toggle between URL encoded and decoded formats";
pub const DECODE_ERROR: &str = "(unable to decode value)";

/// One `name: value` line in the headers outline.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct OutlineRow {
    pub name: String,
    pub value: String,
    /// Set when the value could not be percent-decoded and is shown raw.
    pub decode_error: bool,
    pub tooltip: Option<String>,
    /// Double-clicking the row flips parameter decoding for the whole view.
    pub toggles_decoding: bool,
}

impl OutlineRow {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        OutlineRow {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// A titled, countable group of rows, rebuilt as a whole on every refresh.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutlineSection {
    pub title: String,
    pub count: Option<usize>,
    pub rows: Vec<OutlineRow>,
    pub hidden: bool,
    pub expanded: bool,
}

impl OutlineSection {
    pub fn new(title: impl Into<String>, hidden: bool) -> Self {
        OutlineSection {
            title: title.into(),
            count: None,
            rows: vec![],
            hidden,
            expanded: true,
        }
    }

    pub fn heading(&self) -> String {
        match self.count {
            Some(count) => format!("{} ({})", self.title, count),
            None => self.title.clone(),
        }
    }

    pub fn remove_children(&mut self) {
        self.rows.clear();
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StatusLine {
    pub code: u16,
    pub text: String,
    pub tier: StatusTier,
}

impl StatusLine {
    pub fn label(&self) -> String {
        format!("{} {}", self.code, self.text)
    }
}

/// Everything the headers tab shows, top to bottom.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HeadersOutline {
    pub url: OutlineRow,
    pub request_method: Option<OutlineRow>,
    pub status: Option<StatusLine>,
    pub request_headers: OutlineSection,
    pub query_string: OutlineSection,
    pub form_data: OutlineSection,
    pub request_payload: OutlineSection,
    pub response_headers: OutlineSection,
}

impl Default for HeadersOutline {
    fn default() -> Self {
        HeadersOutline {
            url: OutlineRow::new("Request URL", ""),
            request_method: None,
            status: None,
            request_headers: OutlineSection::new("Request Headers", false),
            query_string: OutlineSection::new("Query String Parameters", true),
            form_data: OutlineSection::new("Form Data", true),
            request_payload: OutlineSection::new("Request Payload", true),
            response_headers: OutlineSection::new("Response Headers", false),
        }
    }
}

impl HeadersOutline {
    pub fn sections(&self) -> [&OutlineSection; 5] {
        [
            &self.request_headers,
            &self.query_string,
            &self.form_data,
            &self.request_payload,
            &self.response_headers,
        ]
    }
}
