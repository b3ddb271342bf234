//! End-to-end checks of the public validation API: capture-shaped records
//! flowing through the comparator the way the validation runner uses them.

use docprobe_domain::{
    Header, Headers, HttpResponse, ResponseComparator, ValidationErrorCode,
};
use pretty_assertions::assert_eq;

fn documented_response() -> HttpResponse {
    let headers: Headers = [
        Header::new("Content-Type", "application/json"),
        Header::new("ETag", "\"v1\""),
    ]
    .into_iter()
    .collect();
    HttpResponse::new("HTTP/1.1", 200, "OK", headers, r#"{"id": 42}"#)
}

#[test]
fn identical_responses_validate_cleanly() {
    let expected = documented_response();
    let actual = expected.clone();

    let outcome = ResponseComparator::new().compare(&expected, &actual);
    assert!(outcome.is_valid());
    assert_eq!(outcome.len(), 0);
}

#[test]
fn live_response_with_charset_parameter_still_matches() {
    let expected = documented_response();

    let mut headers = Headers::new();
    headers.push("content-type", "application/json; charset=utf-8");
    headers.push("etag", "\"v1\"");
    headers.push("Date", "Tue, 04 Aug 2026 10:00:00 GMT");
    let actual = HttpResponse::new("HTTP/2.0", 200, "OK", headers, r#"{"id": 42}"#);

    let outcome = ResponseComparator::new().compare(&expected, &actual);
    assert!(outcome.is_valid());
}

#[test]
fn transport_failure_surfaces_as_status_mismatch() {
    let expected = documented_response();
    let actual = HttpResponse::failure("connection refused");

    assert_eq!(actual.status, 504);
    assert!(actual.status_message.starts_with("HttpResponseFailure "));

    let outcome = ResponseComparator::new().compare(&expected, &actual);
    assert!(!outcome.is_valid());
    let codes: Vec<_> = outcome.iter().map(|e| e.code).collect();
    assert!(codes.contains(&ValidationErrorCode::HttpStatusCodeDifferent));
}

#[test]
fn every_discrepancy_is_reported_in_one_run() {
    let expected = documented_response();

    let mut headers = Headers::new();
    headers.push("Content-Type", "text/html");
    let actual = HttpResponse::new("HTTP/1.1", 404, "Not Found", headers, "<html></html>");

    let outcome = ResponseComparator::new().compare(&expected, &actual);
    let codes: Vec<_> = outcome.iter().map(|e| e.code).collect();
    assert_eq!(
        codes,
        vec![
            ValidationErrorCode::HttpStatusCodeDifferent,
            ValidationErrorCode::HttpStatusMessageDifferent,
            ValidationErrorCode::HttpHeaderValueDifferent,
            ValidationErrorCode::HttpRequiredHeaderMissing,
        ]
    );

    // Every error renders a caller-facing message.
    for error in &outcome {
        assert!(!error.message.is_empty());
    }
}

#[test]
fn diagnostic_dump_renders_status_line_headers_and_body() {
    let expected = documented_response();
    let text = expected.full_http_text();

    assert_eq!(
        text,
        "HTTP/1.1 200 OK\nContent-Type: application/json\nETag: \"v1\"\n\n{\"id\": 42}"
    );
}
