//! Filesystem probes used by the routing decision
//!
//! Routing only needs two read-only facts about a path: whether it is a
//! regular file and when it was last modified.

use std::path::{Path, PathBuf};

use crate::http::cache::unix_secs;
use crate::http::path::join_literal;

/// Read-only view of the document root
///
/// Paths are rewritten request targets taken literally: a query string is
/// part of the file name and nothing is percent-decoded.
pub trait FileProbe {
    /// Modification time in Unix seconds, `None` if the path does not exist
    fn modified_secs(&self, path: &str) -> Option<u64>;

    /// True when the path exists and is not a directory
    fn is_file(&self, path: &str) -> bool;
}

/// Probe backed by the real document root on disk
#[derive(Debug, Clone)]
pub struct DiskProbe {
    root: PathBuf,
}

impl DiskProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileProbe for DiskProbe {
    fn modified_secs(&self, path: &str) -> Option<u64> {
        let metadata = std::fs::metadata(join_literal(&self.root, path)).ok()?;
        metadata.modified().ok().map(unix_secs)
    }

    fn is_file(&self, path: &str) -> bool {
        std::fs::metadata(join_literal(&self.root, path)).is_ok_and(|m| !m.is_dir())
    }
}
