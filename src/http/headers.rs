//! Development response headers
//!
//! Every response leaving the server disables client caching and allows
//! cross-origin access, whatever its status.

use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, EXPIRES, PRAGMA,
};

/// Fixed headers attached to every response
pub const DEV_HEADERS: [(HeaderName, &str); 6] = [
    (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Insert the development headers, replacing any earlier value
pub fn apply_dev_headers(headers: &mut HeaderMap) {
    for (name, value) in DEV_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}
