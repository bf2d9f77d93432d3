// Configuration types module
// Defines the immutable configuration value shared by every connection

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads, CPU cores when unset
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Site layout and path rewriting rules
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// URL prefix the application is mounted under (e.g. `/DIPCP`)
    pub mount_prefix: String,
    /// Document root, relative to the startup working directory
    pub root_dir: String,
    pub index_file: String,
    /// Top-level asset folders that never fall back to the index file
    #[serde(default = "default_asset_dirs")]
    pub asset_dirs: Vec<String>,
    /// Extensions that never fall back to the index file
    #[serde(default = "default_static_extensions")]
    pub static_extensions: Vec<String>,
    /// Extensions that get a `?v=<mtime>` cache-busting query
    #[serde(default = "default_versioned_extensions")]
    pub versioned_extensions: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

fn default_asset_dirs() -> Vec<String> {
    ["js", "styles", "locales"].map(String::from).to_vec()
}

fn default_static_extensions() -> Vec<String> {
    ["js", "css", "json", "png", "jpg", "jpeg", "gif", "svg", "ico"]
        .map(String::from)
        .to_vec()
}

fn default_versioned_extensions() -> Vec<String> {
    ["js", "css"].map(String::from).to_vec()
}

impl SiteConfig {
    /// Resolve the document root against the startup working directory
    pub fn document_root(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.root_dir)
    }

    /// Path of the index file as seen after the mount prefix is stripped
    pub fn index_path(&self) -> String {
        format!("/{}", self.index_file.trim_start_matches('/'))
    }

    /// Mount prefix with a trailing slash, the redirect target for `/`
    pub fn mount_location(&self) -> String {
        format!("{}/", self.mount_prefix.trim_end_matches('/'))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mount_prefix: "/DIPCP".to_string(),
            root_dir: "DIPCP".to_string(),
            index_file: "index.html".to_string(),
            asset_dirs: default_asset_dirs(),
            static_extensions: default_static_extensions(),
            versioned_extensions: default_versioned_extensions(),
        }
    }
}
