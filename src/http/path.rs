//! Request path decoding module
//!
//! Turns a raw request target into safe relative path segments.

use std::path::{Path, PathBuf};

/// Split a request target into its path and optional query
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    let target = target.split_once('#').map_or(target, |(before, _)| before);
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Percent-decode a path, leaving malformed escapes untouched
pub fn percent_decode(input: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(input.as_bytes())).into_owned()
}

/// Drop `.` and empty segments, let `..` pop the previous one
fn normalize<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                normalized.pop();
            }
            s => normalized.push(s.to_string()),
        }
    }
    normalized
}

/// Decode the path part of a target into normalized segments
///
/// Query and fragment are dropped. `.` and empty segments are skipped and
/// `..` pops the previous segment, so the result never climbs above the root.
pub fn decode_segments(target: &str) -> Vec<String> {
    let (path, _) = split_target(target);
    normalize(percent_decode(path).split(['/', '\\']))
}

/// Map a request target to a filesystem path under `root`
pub fn join_under(root: &Path, target: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(decode_segments(target));
    path
}

/// Map a rewritten target under `root` exactly as written
///
/// Nothing is decoded and a `?query` stays part of the last segment, so
/// `/app.js?v=3` names a file called `app.js?v=3`. Routing probes use this
/// form. Traversal is still contained.
pub fn join_literal(root: &Path, target: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(normalize(target.split('/')));
    path
}
