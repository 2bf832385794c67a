use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub expires: String,
    pub max_age: String,
    pub http_only: bool,
    pub secure: bool,
    /// Byte length of the text the cookie was parsed from.
    pub size: usize,
}

impl Cookie {
    /// Parses the value of a request `Cookie` header. Every pair becomes one
    /// record sized by its own `name=value` text.
    pub fn parse_request_header(value: &str) -> Vec<Cookie> {
        value
            .split(';')
            .map(|pair| pair.trim())
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| match cookie::Cookie::parse(pair) {
                Ok(c) => Some(Cookie {
                    name: c.name().to_string(),
                    value: c.value().to_string(),
                    size: pair.len(),
                    ..Default::default()
                }),
                Err(err) => {
                    warn!("skip request cookie {:?}: {}", pair, err);
                    None
                }
            })
            .collect()
    }

    /// Parses the value of one `Set-Cookie` header.
    pub fn parse_set_cookie(value: &str) -> Option<Cookie> {
        match cookie::Cookie::parse(value) {
            Ok(c) => Some(Cookie {
                name: c.name().to_string(),
                value: c.value().to_string(),
                domain: c.domain().unwrap_or("").to_string(),
                path: c.path().unwrap_or("").to_string(),
                expires: match c.expires() {
                    Some(cookie::Expiration::DateTime(at)) => at.to_string(),
                    Some(cookie::Expiration::Session) | None => "Session".to_string(),
                },
                max_age: c
                    .max_age()
                    .map(|d| d.whole_seconds().to_string())
                    .unwrap_or_default(),
                http_only: c.http_only().unwrap_or(false),
                secure: c.secure().unwrap_or(false),
                size: value.len(),
            }),
            Err(err) => {
                warn!("skip set-cookie {:?}: {}", value, err);
                None
            }
        }
    }
}
