use std::str::FromStr;
use std::time::Instant;

use log::info;
use poll_promise::Promise;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use netlens_core::data::http::{Header, Method};

/// What came back from one round trip, in the order the resource wants it.
#[derive(Clone, Debug)]
pub struct Exchange {
    pub request_headers: Vec<Header>,
    pub response_headers: Vec<Header>,
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
    pub elapsed_time: u128,
}

#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct RestSender {}

impl RestSender {
    /// Headers the request will carry before the client adds its own.
    pub fn request_headers(body: &str) -> Vec<Header> {
        let mut headers = vec![Header::new("Accept", "*/*")];
        if !body.is_empty() {
            let content_type = if body.trim_start().starts_with('{') {
                "application/json"
            } else {
                "application/x-www-form-urlencoded"
            };
            headers.push(Header::new(CONTENT_TYPE.as_str(), content_type));
        }
        headers
    }

    pub fn send(
        method: Method,
        url: String,
        body: String,
        headers: Vec<Header>,
    ) -> Promise<Result<Exchange, String>> {
        Promise::spawn_thread("rest_send", move || {
            Self::block_send(method, url, body, headers).map_err(|e| e.to_string())
        })
    }

    fn block_send(
        method: Method,
        url: String,
        body: String,
        headers: Vec<Header>,
    ) -> anyhow::Result<Exchange> {
        let client = Client::new();
        let method = reqwest::Method::from_str(method.to_string().as_str())?;
        let mut builder = client.request(method, url.as_str());
        for header in headers.iter() {
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }
        if !body.is_empty() {
            builder = builder.body(body);
        }
        let request = builder.build()?;
        let request_headers = Self::to_headers(request.headers());
        let start_time = Instant::now();
        let response = client.execute(request)?;
        let status = response.status();
        let response_headers = Self::to_headers(response.headers());
        let body = response.bytes()?.to_vec();
        let elapsed_time = start_time.elapsed().as_millis();
        info!("{} {} in {}ms", status.as_u16(), url, elapsed_time);
        Ok(Exchange {
            request_headers,
            response_headers,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body,
            elapsed_time,
        })
    }

    fn to_headers(header_map: &HeaderMap) -> Vec<Header> {
        header_map
            .iter()
            .map(|(name, value)| Header::new(name.as_str(), value.to_str().unwrap_or("")))
            .collect()
    }
}
