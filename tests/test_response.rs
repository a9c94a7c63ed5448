use beacon::http::response::{Response, ResponseBuilder, SERVER_NAME, StatusCode};
use beacon::http::writer::{serialize_response, write_response};
use chrono::{TimeZone, Utc};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotModified.as_u16(), 304);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotModified.reason_phrase(), "NOT MODIFIED");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "NOT FOUND");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("B", "2")
        .header("A", "1")
        .header("C", "3")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["B", "A", "C"]);
}

#[test]
fn test_response_builder_replaces_duplicate_header() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("content-type", "text/html")
        .build();

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_response_builder_adds_nothing_implicitly() {
    let response = ResponseBuilder::new(StatusCode::Ok).body("abc").build();

    assert!(response.headers.is_empty());
    assert_eq!(response.body, b"abc".to_vec());
}

#[test]
fn test_bad_request_wire_format() {
    let bytes = serialize_response(&Response::bad_request());

    assert_eq!(
        bytes,
        b"HTTP/1.1 400 Bad Request\r\nContent-Type: text/html\r\n\r\n400 Bad Request\n".to_vec()
    );
}

#[test]
fn test_not_found_wire_format() {
    let bytes = serialize_response(&Response::not_found());

    assert_eq!(
        bytes,
        b"HTTP/1.1 404 NOT FOUND\r\nContent-Type: text/html\r\n\r\n404 Not Found\n".to_vec()
    );
}

#[test]
fn test_not_implemented_wire_format() {
    let bytes = serialize_response(&Response::not_implemented());

    assert_eq!(
        bytes,
        b"HTTP/1.1 501 Not Implemented\r\nContent-Type: text/html\r\n\r\n501 Not Implemented\n"
            .to_vec()
    );
}

#[test]
fn test_not_modified_has_date_and_no_body() {
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
    let bytes = serialize_response(&Response::not_modified(now));

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "HTTP/1.1 304 NOT MODIFIED\r\nDate: Mon Jun 03 10:00:00 GMT 2024\r\n\r\n"
    );
}

#[test]
fn test_file_headers_wire_format() {
    let now = Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap();
    let modified = Utc.with_ymd_and_hms(2023, 1, 1, 12, 57, 6).unwrap();
    let bytes = serialize_response(&Response::file_headers(now, modified, 50));

    let expected = format!(
        "HTTP/1.1 200 OK\r\nDate: Mon Jun 03 10:00:00 GMT 2024\r\nServer: {}\r\n\
         Last-Modified: Sun Jan 01 12:57:06 GMT 2023\r\nContent-Length: 50\r\n\r\n",
        SERVER_NAME
    );
    assert_eq!(String::from_utf8(bytes).unwrap(), expected);
}

#[test]
fn test_server_name_identifies_server() {
    assert!(SERVER_NAME.starts_with("Beacon/"));
}

#[tokio::test]
async fn test_write_response_writes_everything() {
    let response = Response::not_found();
    let mut out: Vec<u8> = Vec::new();

    write_response(&response, &mut out).await.unwrap();

    assert_eq!(out, serialize_response(&response));
}
