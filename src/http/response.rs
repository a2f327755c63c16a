//! Outgoing response contract.
//!
//! # Responsibilities
//! - Carry status, headers and body bytes back to the transport
//! - Provide the `200 OK` text shape used by smart wrapping
//!
//! # Design Decisions
//! - Bare string returns from controllers become `text/plain` responses
//! - Error responses carry a short text body only; detailed diagnostics
//!   belong to event subscribers (logging), not the wire

use http::{header, HeaderMap, StatusCode};

/// The minimal response produced by the dispatch kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Create an empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// A `200 OK` plain-text response. This is the shape smart wrapping
    /// produces for controllers that return a bare body string.
    pub fn text(body: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        Self {
            status: StatusCode::OK,
            headers,
            body: body.into().into_bytes(),
        }
    }

    /// Replace the status, consuming and returning the response.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Add a header, consuming and returning the response.
    pub fn with_header(mut self, name: header::HeaderName, value: &str) -> Self {
        if let Ok(value) = header::HeaderValue::from_str(value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The response body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as UTF-8 text (lossy).
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_defaults() {
        let res = Response::text("hello");
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body_text(), "hello");
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_with_status_overrides() {
        let res = Response::text("Not Found").with_status(StatusCode::NOT_FOUND);
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.body_text(), "Not Found");
    }
}
