//! Logger module
//!
//! Provides logging utilities for the dev server including:
//! - Startup banner and shutdown line on stdout
//! - Access logging in Common Log Format on stderr
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::SiteConfig;
use std::net::SocketAddr;

/// Write to info log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// Startup banner, two lines
pub fn log_server_start(addr: &SocketAddr, site: &SiteConfig) {
    write_info(&format!(
        "Dev server running at http://localhost:{}{}",
        addr.port(),
        site.mount_location()
    ));
    write_info("Caching disabled, file changes show up on reload. Press Ctrl+C to stop");
}

pub fn log_server_stopped() {
    write_info("\nServer stopped");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    write_error(&entry.format_common());
}
