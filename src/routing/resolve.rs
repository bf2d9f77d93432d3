//! Request path resolution
//!
//! Decides what a request target maps to before any file is opened:
//! mount prefix handling, cache-busting versions for scripts and styles,
//! and the single-page-app fallback to the index file.

use crate::config::SiteConfig;
use crate::http::path::split_target;

use super::probe::FileProbe;

/// Outcome of resolving a request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Redirect to another location (the bare `/`)
    Redirect { location: String },
    /// Target is outside the mount prefix
    NotFound,
    /// Serve the target (relative to the document root)
    Serve { path: String },
    /// Serve a script or style asset tagged with its mtime
    ServeWithVersion { path: String, version: u64 },
}

impl Route {
    /// The rewritten request target, e.g. `/js/app.js?v=1700000000`
    pub fn request_target(&self) -> Option<String> {
        match self {
            Self::Redirect { location } => Some(location.clone()),
            Self::NotFound => None,
            Self::Serve { path } => Some(path.clone()),
            Self::ServeWithVersion { path, version } => Some(format!("{path}?v={version}")),
        }
    }
}

/// Resolve a raw request target (path plus optional query)
pub fn resolve(target: &str, site: &SiteConfig, probe: &impl FileProbe) -> Route {
    let prefix = site.mount_prefix.trim_end_matches('/');
    let Some(rest) = target.strip_prefix(prefix) else {
        if target == "/" {
            return Route::Redirect {
                location: site.mount_location(),
            };
        }
        return Route::NotFound;
    };

    let path = strip_mount(rest, site);
    let (path_only, query) = split_target(&path);

    let version = (query.is_none() && has_extension(path_only, &site.versioned_extensions))
        .then(|| probe.modified_secs(path_only).unwrap_or(0));
    let rewritten = match version {
        Some(v) => format!("{path_only}?v={v}"),
        None => path.clone(),
    };

    // The fallback sees the rewritten target, version query included
    if !is_asset_request(&rewritten, site) && !probe.is_file(&rewritten) {
        return Route::Serve {
            path: site.index_path(),
        };
    }

    match version {
        Some(version) => Route::ServeWithVersion {
            path: path_only.to_string(),
            version,
        },
        None => Route::Serve { path },
    }
}

/// Turn what follows the mount prefix into a rooted path
fn strip_mount(rest: &str, site: &SiteConfig) -> String {
    if rest.is_empty() || rest == "/" {
        site.index_path()
    } else if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    }
}

/// Paths under a known asset folder or with a static extension are served
/// as-is, never replaced by the index file
fn is_asset_request(path: &str, site: &SiteConfig) -> bool {
    let in_asset_dir = site.asset_dirs.iter().any(|dir| {
        path.strip_prefix('/')
            .and_then(|p| p.strip_prefix(dir.trim_matches('/')))
            .is_some_and(|p| p.starts_with('/'))
    });
    in_asset_dir || has_extension(path, &site.static_extensions)
}

fn has_extension(path: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        path.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory document root: path -> mtime, `None` marks a directory
    #[derive(Default)]
    struct FakeRoot(HashMap<&'static str, Option<u64>>);

    impl FakeRoot {
        fn with(entries: &[(&'static str, Option<u64>)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl FileProbe for FakeRoot {
        fn modified_secs(&self, path: &str) -> Option<u64> {
            self.0.get(path).copied().flatten()
        }

        fn is_file(&self, path: &str) -> bool {
            matches!(self.0.get(path), Some(Some(_)))
        }
    }

    fn site() -> SiteConfig {
        SiteConfig::default()
    }

    fn serve(path: &str) -> Route {
        Route::Serve {
            path: path.to_string(),
        }
    }

    #[test]
    fn test_root_redirects_to_mount() {
        let route = resolve("/", &site(), &FakeRoot::default());
        assert_eq!(
            route,
            Route::Redirect {
                location: "/DIPCP/".to_string()
            }
        );
    }

    #[test]
    fn test_paths_outside_mount_are_not_found() {
        let root = FakeRoot::with(&[("/index.html", Some(1))]);
        for target in ["/index.html", "/js/app.js", "/favicon.ico", "/dipcp/", "//", "/?x=1"] {
            assert_eq!(resolve(target, &site(), &root), Route::NotFound, "{target}");
        }
    }

    #[test]
    fn test_mount_root_serves_index() {
        let root = FakeRoot::with(&[("/index.html", Some(1))]);
        let expected = resolve("/DIPCP/index.html", &site(), &root);
        assert_eq!(expected, serve("/index.html"));
        assert_eq!(resolve("/DIPCP", &site(), &root), expected);
        assert_eq!(resolve("/DIPCP/", &site(), &root), expected);
    }

    #[test]
    fn test_scripts_and_styles_get_mtime_version() {
        let root = FakeRoot::with(&[
            ("/js/app.js", Some(1_700_000_000)),
            ("/styles/main.css", Some(1_650_000_000)),
        ]);
        let route = resolve("/DIPCP/js/app.js", &site(), &root);
        assert_eq!(
            route,
            Route::ServeWithVersion {
                path: "/js/app.js".to_string(),
                version: 1_700_000_000
            }
        );
        assert_eq!(
            route.request_target().as_deref(),
            Some("/js/app.js?v=1700000000")
        );
        assert_eq!(resolve("/DIPCP/js/app.js", &site(), &root), route);

        let css = resolve("/DIPCP/styles/main.css", &site(), &root);
        assert_eq!(css.request_target().as_deref(), Some("/styles/main.css?v=1650000000"));
    }

    #[test]
    fn test_missing_asset_version_is_zero() {
        let route = resolve("/DIPCP/js/gone.js", &site(), &FakeRoot::default());
        assert_eq!(
            route,
            Route::ServeWithVersion {
                path: "/js/gone.js".to_string(),
                version: 0
            }
        );
    }

    #[test]
    fn test_existing_query_skips_versioning() {
        let root = FakeRoot::with(&[("/js/app.js", Some(5))]);
        assert_eq!(
            resolve("/DIPCP/js/app.js?v=custom", &site(), &root),
            serve("/js/app.js?v=custom")
        );
    }

    #[test]
    fn test_unknown_route_falls_back_to_index() {
        let root = FakeRoot::with(&[("/index.html", Some(1))]);
        assert_eq!(resolve("/DIPCP/some/unknown/route", &site(), &root), serve("/index.html"));
        assert_eq!(resolve("/DIPCP/settings?tab=2", &site(), &root), serve("/index.html"));
    }

    #[test]
    fn test_directory_falls_back_to_index() {
        let root = FakeRoot::with(&[("/docs", None), ("/index.html", Some(1))]);
        assert_eq!(resolve("/DIPCP/docs", &site(), &root), serve("/index.html"));
    }

    #[test]
    fn test_top_level_script_falls_back_to_index() {
        // `/app.js?v=N` is neither under an asset folder nor an existing file
        let root = FakeRoot::with(&[("/app.js", Some(7)), ("/index.html", Some(1))]);
        assert_eq!(resolve("/DIPCP/app.js", &site(), &root), serve("/index.html"));
        assert_eq!(resolve("/DIPCP/theme.css", &site(), &root), serve("/index.html"));
    }

    #[test]
    fn test_query_takes_part_in_fallback() {
        let root = FakeRoot::with(&[("/robots.txt", Some(1)), ("/img/logo.png", Some(1))]);
        assert_eq!(resolve("/DIPCP/robots.txt?x=1", &site(), &root), serve("/index.html"));
        assert_eq!(resolve("/DIPCP/img/logo.png?x=1", &site(), &root), serve("/index.html"));
        assert_eq!(resolve("/DIPCP/img/logo.png", &site(), &root), serve("/img/logo.png"));
        // A query ending in a static extension keeps the target as-is
        assert_eq!(resolve("/DIPCP/view?img=a.png", &site(), &root), serve("/view?img=a.png"));
    }

    #[test]
    fn test_existing_file_is_served() {
        let root = FakeRoot::with(&[("/robots.txt", Some(1))]);
        assert_eq!(resolve("/DIPCP/robots.txt", &site(), &root), serve("/robots.txt"));
    }

    #[test]
    fn test_static_extensions_never_fall_back() {
        let root = FakeRoot::default();
        assert_eq!(resolve("/DIPCP/locales/en.json", &site(), &root), serve("/locales/en.json"));
        assert_eq!(resolve("/DIPCP/missing.png", &site(), &root), serve("/missing.png"));
        assert_eq!(resolve("/DIPCP/favicon.ico", &site(), &root), serve("/favicon.ico"));
    }

    #[test]
    fn test_asset_dirs_never_fall_back() {
        let root = FakeRoot::default();
        assert_eq!(resolve("/DIPCP/js/vendor/", &site(), &root), serve("/js/vendor/"));
        assert_eq!(resolve("/DIPCP/locales/README", &site(), &root), serve("/locales/README"));
        // Only a folder prefix counts, not a name sharing its first letters
        assert_eq!(resolve("/DIPCP/jsx", &site(), &root), serve("/index.html"));
        assert_eq!(resolve("/DIPCP/js", &site(), &root), serve("/index.html"));
    }

    #[test]
    fn test_unslashed_remainder_is_rooted() {
        let root = FakeRoot::with(&[("/about.html", Some(1))]);
        assert_eq!(resolve("/DIPCPabout.html", &site(), &root), serve("/about.html"));
    }

    #[test]
    fn test_custom_mount_prefix() {
        let site = SiteConfig {
            mount_prefix: "/app/".to_string(),
            ..SiteConfig::default()
        };
        let root = FakeRoot::default();
        assert_eq!(
            resolve("/", &site, &root),
            Route::Redirect {
                location: "/app/".to_string()
            }
        );
        assert_eq!(resolve("/app", &site, &root), serve("/index.html"));
        assert_eq!(resolve("/DIPCP/", &site, &root), Route::NotFound);
    }
}
