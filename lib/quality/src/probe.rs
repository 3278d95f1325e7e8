use log::debug;
use std::time::Duration;
use triplestore::http::HttpClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Status(u16),
    Failed(String),
}

impl ProbeOutcome {
    /// Only a final `200 OK` counts as available.
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Status(200))
    }
}

/// Live reachability check of a URL. Failures are outcomes, never errors.
pub trait UrlProbe {
    fn probe(&self, url: &str) -> ProbeOutcome;
}

/// HEAD request following redirects, bounded by `timeout`.
pub struct HttpUrlProbe {
    http: HttpClient,
    timeout: Duration,
}

impl HttpUrlProbe {
    pub fn new(http: HttpClient, timeout: Duration) -> HttpUrlProbe {
        HttpUrlProbe { http, timeout }
    }
}

impl UrlProbe for HttpUrlProbe {
    fn probe(&self, url: &str) -> ProbeOutcome {
        match self.http.head_status(url, self.timeout) {
            Ok(status) => ProbeOutcome::Status(status),
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                ProbeOutcome::Failed(e.to_string())
            }
        }
    }
}
