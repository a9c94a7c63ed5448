use chrono::{DateTime, Utc};

/// Request method as far as the server cares about it.
///
/// Only GET and HEAD are served. Any other verb is kept verbatim so it can be
/// logged before the request is answered with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Stream the file body
    Get,
    /// HEAD - Headers only, honours If-Modified-Since
    Head,
    /// Request line missing or unparsable, or a bad If-Modified-Since date
    Malformed,
    /// Any other verb
    Unsupported(String),
}

impl Method {
    /// Maps a request-line verb to a method. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use beacon::http::request::Method;
    /// assert_eq!(Method::from_verb("GET"), Method::Get);
    /// assert_eq!(Method::from_verb("get"), Method::Unsupported("get".to_string()));
    /// ```
    pub fn from_verb(verb: &str) -> Self {
        match verb {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            other => Method::Unsupported(other.to_string()),
        }
    }
}

/// A parsed request. Built once per connection and consumed by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Request path, verbatim. `None` only for malformed requests.
    pub path: Option<String>,
    /// Present only when the request carried a valid If-Modified-Since header.
    pub if_modified_since: Option<DateTime<Utc>>,
    /// `Connection: keep-alive` seen on the second request line.
    pub wants_persistent: bool,
    /// `Connection: close` seen on the second request line.
    pub wants_close: bool,
}

impl Request {
    /// The sentinel produced for anything the parser cannot make sense of.
    pub fn malformed() -> Self {
        Self {
            method: Method::Malformed,
            path: None,
            if_modified_since: None,
            wants_persistent: false,
            wants_close: false,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.method == Method::Malformed
    }
}
