// Application state module
// Process-wide state, immutable after startup

use std::path::Path;

use super::types::{Config, SiteConfig};
use crate::routing::DiskProbe;

/// State shared by every connection handler
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Probe rooted at the absolute document root, fixed at startup
    pub probe: DiskProbe,
}

impl AppState {
    /// Build the state, anchoring the document root at `cwd`
    pub fn new(config: Config, cwd: &Path) -> Self {
        let probe = DiskProbe::new(config.site.document_root(cwd));
        Self { config, probe }
    }

    pub fn document_root(&self) -> &Path {
        self.probe.root()
    }

    pub const fn site(&self) -> &SiteConfig {
        &self.config.site
    }

    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
