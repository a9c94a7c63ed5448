use chrono::{DateTime, Utc};

use crate::http::date::format_http_date;

/// Identifies this server in the `Server` header.
pub const SERVER_NAME: &str = concat!("Beacon/", env!("CARGO_PKG_VERSION"));

/// HTTP status codes the server can answer with.
///
/// Reason phrases keep the server's historical capitalisation, which clients
/// of the old implementation compare against:
/// - `Ok` (200): `OK`
/// - `NotModified` (304): `NOT MODIFIED`
/// - `BadRequest` (400): `Bad Request`
/// - `NotFound` (404): `NOT FOUND`
/// - `NotImplemented` (501): `Not Implemented`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NotModified,
    BadRequest,
    NotFound,
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use beacon::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotModified.as_u16(), 304);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotModified => 304,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotModified => "NOT MODIFIED",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "NOT FOUND",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete response: status line, headers in emission order, body.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Unlike a general purpose builder this one adds no headers on its own;
/// every response shape on the wire is fixed by the constructors below.
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header. An existing header of the same name is replaced in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    fn error(status: StatusCode) -> Self {
        let body = format!("{} {}\n", status.as_u16(), title_case(status));
        ResponseBuilder::new(status)
            .header("Content-Type", "text/html")
            .body(body)
            .build()
    }

    /// 400, for the malformed-request sentinel.
    pub fn bad_request() -> Self {
        Self::error(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::error(StatusCode::NotFound)
    }

    pub fn not_implemented() -> Self {
        Self::error(StatusCode::NotImplemented)
    }

    /// 304 for a HEAD whose file has not changed. Carries no body.
    pub fn not_modified(now: DateTime<Utc>) -> Self {
        ResponseBuilder::new(StatusCode::NotModified)
            .header("Date", format_http_date(now))
            .build()
    }

    /// Header block describing a file, answered to HEAD.
    pub fn file_headers(now: DateTime<Utc>, last_modified: DateTime<Utc>, len: u64) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Date", format_http_date(now))
            .header("Server", SERVER_NAME)
            .header("Last-Modified", format_http_date(last_modified))
            .header("Content-Length", len.to_string())
            .build()
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

// Error bodies read "404 Not Found" even where the status line shouts.
fn title_case(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NotFound => "Not Found",
        other => other.reason_phrase(),
    }
}
