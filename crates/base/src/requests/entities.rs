use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HttpRequestMethod {
    Get,
    Post,
}

impl Default for HttpRequestMethod {
    fn default() -> Self {
        Self::Get
    }
}

pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct HttpRequestData {
    pub method: HttpRequestMethod,
    pub url: String,
    pub headers: Option<Headers>,
    pub timeout: Option<Duration>,
}

impl HttpRequestData {
    pub fn new(method: HttpRequestMethod, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(String::from(name), String::from(value));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

pub type StatusCode = u16;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HttpResponseData {
    pub status_code: StatusCode,
    pub body: String,
}
