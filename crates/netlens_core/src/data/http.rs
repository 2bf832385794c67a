use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One `name=value` pair of a query string or an url encoded form body.
/// The value is kept exactly as it appeared on the wire.
#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn parse_list(text: &str) -> Vec<Parameter> {
        if text.is_empty() {
            return vec![];
        }
        text.split('&')
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => Parameter::new(name, value),
                None => Parameter::new(pair, ""),
            })
            .collect()
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    HEAD,
    OPTIONS,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Display, EnumString)]
pub enum ResourceKind {
    Document,
    Stylesheet,
    Image,
    Script,
    XHR,
    WebSocket,
    #[default]
    Other,
}

impl ResourceKind {
    /// Whether the body of this kind of resource can be shown in a content tab.
    pub fn has_content_view(&self) -> bool {
        match self {
            ResourceKind::Document
            | ResourceKind::Stylesheet
            | ResourceKind::Image
            | ResourceKind::Script
            | ResourceKind::XHR => true,
            ResourceKind::WebSocket | ResourceKind::Other => false,
        }
    }
}

/// Visual class of a status code. The boundaries are exact: everything
/// below 300 is a success, 300 to 399 a redirect, the rest an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum StatusTier {
    Success,
    Redirect,
    Error,
}

impl StatusTier {
    pub fn from_code(code: u16) -> Self {
        if code < 300 {
            StatusTier::Success
        } else if code < 400 {
            StatusTier::Redirect
        } else {
            StatusTier::Error
        }
    }
}

pub fn find_header<'a>(headers: &'a [Header], name: &str) -> Option<&'a Header> {
    headers.iter().find(|h| h.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tier_boundaries() {
        assert_eq!(StatusTier::from_code(200), StatusTier::Success);
        assert_eq!(StatusTier::from_code(299), StatusTier::Success);
        assert_eq!(StatusTier::from_code(300), StatusTier::Redirect);
        assert_eq!(StatusTier::from_code(399), StatusTier::Redirect);
        assert_eq!(StatusTier::from_code(400), StatusTier::Error);
        assert_eq!(StatusTier::from_code(503), StatusTier::Error);
    }

    #[test]
    fn parameters_split_on_first_equals() {
        let params = Parameter::parse_list("a=1&b=x=y&flag&=v");
        assert_eq!(
            params,
            vec![
                Parameter::new("a", "1"),
                Parameter::new("b", "x=y"),
                Parameter::new("flag", ""),
                Parameter::new("", "v"),
            ]
        );
        assert!(Parameter::parse_list("").is_empty());
    }

    #[test]
    fn only_loaded_bodies_get_a_content_view() {
        assert!(ResourceKind::XHR.has_content_view());
        assert!(ResourceKind::Image.has_content_view());
        assert!(!ResourceKind::WebSocket.has_content_view());
        assert!(!ResourceKind::default().has_content_view());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let headers = vec![Header::new("Content-Type", "text/plain")];
        assert_eq!(
            find_header(&headers, "content-type").map(|h| h.value.as_str()),
            Some("text/plain")
        );
        assert!(find_header(&headers, "accept").is_none());
    }
}
