//! Access log format module
//!
//! One Common Log Format line per request:
//! `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`

use chrono::Local;

/// Access log entry containing the request line and response summary
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request target as received, path plus query
    pub target: String,
    /// Protocol as sent on the request line, e.g. `HTTP/1.1`
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, target: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            target,
            http_version: "HTTP/1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format (CLF); an empty body is logged as `-`
    pub fn format_common(&self) -> String {
        let bytes = if self.body_bytes == 0 {
            "-".to_string()
        } else {
            self.body_bytes.to_string()
        };
        format!(
            "{} - - [{}] \"{} {} {}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.target,
            self.http_version,
            self.status,
            bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1".to_string(),
            "GET".to_string(),
            "/DIPCP/js/app.js".to_string(),
        );
        entry.time = Local.with_ymd_and_hms(2026, 10, 14, 9, 30, 0).unwrap();
        entry.body_bytes = 512;
        entry
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format_common();
        assert!(log.starts_with("127.0.0.1 - - [14/Oct/2026:09:30:00 "));
        assert!(log.ends_with("] \"GET /DIPCP/js/app.js HTTP/1.1\" 200 512"));
    }

    #[test]
    fn test_empty_body_is_dash() {
        let mut entry = create_test_entry();
        entry.status = 302;
        entry.body_bytes = 0;
        assert!(entry.format_common().ends_with("\" 302 -"));
    }
}
