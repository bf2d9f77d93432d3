//! Request handler module
//!
//! Method dispatch, path resolution and static file serving for the
//! mounted single-page app.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
