//! HTTP response building module
//!
//! Builders for every response the dev server sends. Each one carries the
//! development headers from [`super::headers`].

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, LAST_MODIFIED, LOCATION};
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};

use super::headers::apply_dev_headers;

/// Body sent with 404 responses
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Finish a builder, attaching the development headers
fn finish(builder: Builder, body: Bytes, label: &str) -> Response<Full<Bytes>> {
    let mut response = builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error(label, &e);
        let mut fallback = Response::new(Full::new(Bytes::new()));
        *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        fallback
    });
    apply_dev_headers(response.headers_mut());
    response
}

/// Build 302 redirect response, no body
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    let builder = Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, target)
        .header(CONTENT_LENGTH, 0);
    finish(builder, Bytes::new(), "302")
}

/// Build 301 redirect for a directory requested without trailing slash
pub fn build_moved_permanently_response(target: &str) -> Response<Full<Bytes>> {
    let builder = Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, target)
        .header(CONTENT_LENGTH, 0);
    finish(builder, Bytes::new(), "301")
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY, is_head)
}

/// Build 500 Internal Server Error response
pub fn build_500_response(is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "500 Internal Server Error",
        is_head,
    )
}

/// Build 501 response for methods the server does not handle
pub fn build_501_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_IMPLEMENTED, "501 Unsupported method", false)
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    let builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS");
    finish(builder, Bytes::new(), "OPTIONS")
}

/// Build 304 Not Modified response
pub fn build_304_response(last_modified: &str) -> Response<Full<Bytes>> {
    let builder = Response::builder()
        .status(StatusCode::NOT_MODIFIED)
        .header(LAST_MODIFIED, last_modified);
    finish(builder, Bytes::new(), "304")
}

/// Build 200 response carrying file content
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length)
        .header(LAST_MODIFIED, last_modified);
    finish(builder, body, "200")
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    let builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .header(CONTENT_LENGTH, content_length);
    finish(builder, body, "HTML")
}

fn build_text_response(
    status: StatusCode,
    text: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from_static(text.as_bytes())
    };
    let builder = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(CONTENT_LENGTH, text.len());
    finish(builder, body, status.as_str())
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
