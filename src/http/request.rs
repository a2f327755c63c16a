//! Incoming request contract.
//!
//! # Responsibilities
//! - Carry the routing-relevant parts of a request (method, path, query, headers)
//! - Parse the query string once, preserving multi-valued keys
//! - Stay cheap to clone so it can be injected into controller arguments
//!
//! # Design Decisions
//! - The path is stored verbatim: no trailing-slash normalization, no
//!   percent-decoding of path segments (matching is byte-literal)
//! - Query parsing uses `url::form_urlencoded`, so `?a=1&a=2` yields both values

use std::collections::HashMap;

use http::{HeaderMap, Method};

/// The minimal request consumed by the dispatch kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    query: HashMap<String, Vec<String>>,
    headers: HeaderMap,
}

impl Request {
    /// Create a request from a method and a request target (`/path?query`).
    pub fn new(method: Method, target: &str) -> Self {
        let (path, raw_query) = match target.split_once('?') {
            Some((p, q)) => (p, q),
            None => (target, ""),
        };

        let mut query: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
            query
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        Self {
            method,
            path: path.to_string(),
            query,
            headers: HeaderMap::new(),
        }
    }

    /// Shorthand for a GET request.
    pub fn get(target: &str) -> Self {
        Self::new(Method::GET, target)
    }

    /// Add a header, consuming and returning the request.
    pub fn with_header(mut self, name: http::header::HeaderName, value: &str) -> Self {
        if let Ok(value) = http::header::HeaderValue::from_str(value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request path, exactly as received.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value for a query key, if present.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values for a query key (empty slice when absent).
    pub fn query_all(&self, key: &str) -> &[String] {
        self.query.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_splits_path_and_query() {
        let req = Request::get("/blog/42?page=2");
        assert_eq!(req.path(), "/blog/42");
        assert_eq!(req.query("page"), Some("2"));
    }

    #[test]
    fn test_query_is_multi_valued() {
        let req = Request::get("/search?tag=a&tag=b");
        assert_eq!(req.query("tag"), Some("a"));
        assert_eq!(req.query_all("tag"), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_query_values_are_percent_decoded() {
        let req = Request::get("/greet?name=Ada%20Lovelace");
        assert_eq!(req.query("name"), Some("Ada Lovelace"));
    }

    #[test]
    fn test_path_is_not_normalized() {
        let req = Request::get("/blog/");
        assert_eq!(req.path(), "/blog/");
    }

    #[test]
    fn test_absent_query_key() {
        let req = Request::get("/blog");
        assert_eq!(req.query("page"), None);
        assert!(req.query_all("page").is_empty());
    }
}
