//! Plain-data HTTP request and transport-reply types.
//!
//! # Design
//! A request is described as plain data and handed to a [`Transport`]
//! implementation; the library itself never touches the network. All fields
//! use owned types (`String`, `Vec`) so values can move freely across
//! threads and callback boundaries.
//!
//! [`Transport`]: crate::transport::Transport

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built once per fetch and immutable after being handed to the transport.
/// [`HttpRequest::get`] and [`HttpRequest::post`] preset the JSON
/// content-type header; [`HttpRequest::new`] starts from a bare method and
/// URL with no headers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Convenience: GET with `content-type: application/json` preset.
    pub fn get(url: &str) -> Self {
        Self::new(HttpMethod::Get, url).header("content-type", "application/json")
    }

    /// Convenience: POST with `content-type: application/json` preset.
    pub fn post(url: &str) -> Self {
        Self::new(HttpMethod::Post, url).header("content-type", "application/json")
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A bare address means "GET it as JSON".
impl From<&str> for HttpRequest {
    fn from(url: &str) -> Self {
        HttpRequest::get(url)
    }
}

/// What the transport hands back after a round trip.
///
/// Every field is optional: a transport-level failure may leave no status or
/// body, and a response may legitimately carry no body bytes. The pipeline
/// in [`decode_reply`] decides which absence is an error.
///
/// [`decode_reply`]: crate::fetcher::decode_reply
#[derive(Debug, Clone, Default)]
pub struct TransportReply {
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
    pub failure: Option<String>,
}

impl TransportReply {
    /// A completed round trip with a status and body.
    pub fn received(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
            failure: None,
        }
    }

    /// A transport-level failure with no response.
    pub fn failed(cause: impl Into<String>) -> Self {
        Self {
            status: None,
            body: None,
            failure: Some(cause.into()),
        }
    }
}
