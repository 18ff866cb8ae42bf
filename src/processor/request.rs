//! Request descriptors handed to the transport

use std::fmt;
use url::Url;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of one REST call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    method: HttpMethod,
    full_url: String,
}

impl Request {
    pub fn new(method: HttpMethod, full_url: impl Into<String>) -> Self {
        Self {
            method,
            full_url: full_url.into(),
        }
    }

    pub fn get(full_url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, full_url)
    }

    pub fn post(full_url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, full_url)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The complete absolute URL, including the query string
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    /// The URL without its query string
    pub fn endpoint(&self) -> &str {
        self.full_url
            .split_once('?')
            .map(|(endpoint, _)| endpoint)
            .unwrap_or(&self.full_url)
    }

    /// Parse the URL for the transport
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.full_url)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.full_url)
    }
}
