//! HTTP protocol layer module
//!
//! Protocol helpers shared by the request handler: fixed development
//! headers, response builders, MIME detection, path decoding and
//! conditional-request support.

pub mod cache;
pub mod headers;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used types
pub use response::{
    build_304_response, build_404_response, build_500_response, build_501_response,
    build_file_response, build_moved_permanently_response, build_options_response,
    build_redirect_response,
};
