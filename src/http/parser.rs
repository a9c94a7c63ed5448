use crate::http::date::parse_http_date;
use crate::http::request::{Method, Request};

const IF_MODIFIED_SINCE: &str = "If-Modified-Since";

/// Builds a [`Request`] from the header lines that preceded the blank line.
///
/// Never fails: anything unparsable collapses to [`Request::malformed`].
/// The `Connection` flags are only read from the second line.
pub fn parse_request<S: AsRef<str>>(lines: &[S]) -> Request {
    let Some(request_line) = lines.first() else {
        return Request::malformed();
    };

    let mut parts = request_line.as_ref().split_whitespace();
    let (Some(verb), Some(path)) = (parts.next(), parts.next()) else {
        return Request::malformed();
    };

    let mut if_modified_since = None;
    if let Some(line) = lines[1..]
        .iter()
        .map(|line| line.as_ref())
        .find(|line| line.starts_with(IF_MODIFIED_SINCE))
    {
        let value = header_value(line);
        match parse_http_date(value) {
            Ok(date) => if_modified_since = Some(date),
            Err(e) => {
                tracing::debug!(value, error = %e, "Rejecting unparsable If-Modified-Since");
                return Request::malformed();
            }
        }
    }

    let second = lines.get(1).map(|line| line.as_ref()).unwrap_or("");

    Request {
        method: Method::from_verb(verb),
        path: Some(path.to_string()),
        if_modified_since,
        wants_persistent: second.contains("Connection: keep-alive"),
        wants_close: second.contains("Connection: close"),
    }
}

fn header_value(line: &str) -> &str {
    let rest = &line[IF_MODIFIED_SINCE.len()..];
    rest.strip_prefix(':').unwrap_or(rest).trim()
}
