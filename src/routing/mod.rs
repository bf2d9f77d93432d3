//! Routing module
//!
//! Pure routing decision for the dev server:
//! - Mount prefix stripping and the root redirect
//! - Cache-busting versions for script/style assets
//! - Single-page-app fallback to the index file

mod probe;
mod resolve;

pub use probe::{DiskProbe, FileProbe};
pub use resolve::{resolve, Route};
