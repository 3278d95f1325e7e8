use crate::errors::TriplestoreError;
use crate::retry::{BackoffPolicy, RetryPolicy};
use log::{debug, warn};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use std::thread;
use std::time::{Duration, Instant};

pub const TURTLE_MEDIA_TYPE: &str = "text/turtle";
const USER_AGENT: &str = concat!("dcat-quality/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct HttpClientOptions {
    pub retry: RetryPolicy,
    /// Skips TLS certificate verification on every request made by the client.
    pub accept_invalid_certs: bool,
    pub use_system_proxy: bool,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        HttpClientOptions {
            retry: RetryPolicy::default(),
            accept_invalid_certs: false,
            use_system_proxy: true,
        }
    }
}

/// Blocking HTTP client shared by every remote interaction of a run.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    pub fn new(options: HttpClientOptions) -> Result<HttpClient, TriplestoreError> {
        if options.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for remote requests");
        }
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Option::<Duration>::None)
            .redirect(reqwest::redirect::Policy::limited(10))
            .danger_accept_invalid_certs(options.accept_invalid_certs);
        if !options.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(TriplestoreError::HttpClientBuildError)?;
        Ok(HttpClient {
            client,
            retry: options.retry,
        })
    }

    /// Sends the request built by `build`, retrying transport failures and
    /// retryable statuses according to the retry policy. The last response or
    /// error is returned once attempts are exhausted.
    pub fn send_with_retry<F>(&self, build: F) -> Result<Response, reqwest::Error>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let attempts = self.retry.attempts();
        let mut attempt = 0usize;
        loop {
            attempt += 1;
            let started = Instant::now();
            match build(&self.client).send() {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < attempts && self.retry.is_retryable_status(status) {
                        warn!(
                            "Request to {} returned status {}, retrying (attempt {} of {})",
                            resp.url(),
                            status,
                            attempt,
                            attempts
                        );
                    } else {
                        debug!(
                            "Request to {} returned status {} after {} ms",
                            resp.url(),
                            status,
                            started.elapsed().as_millis()
                        );
                        return Ok(resp);
                    }
                }
                Err(err) => {
                    if attempt < attempts && (err.is_timeout() || err.is_connect()) {
                        warn!(
                            "Request failed: {}, retrying (attempt {} of {})",
                            err, attempt, attempts
                        );
                    } else {
                        return Err(err);
                    }
                }
            }
            thread::sleep(self.retry.delay_for_attempt(attempt));
        }
    }

    /// GETs `url` as Turtle. Transport failures and non-success statuses are retrieval errors.
    pub fn get_turtle(
        &self,
        url: &str,
        query: &[(&str, &str)],
        timeout: Option<Duration>,
    ) -> Result<String, TriplestoreError> {
        let resp = self
            .send_with_retry(|client| {
                let mut req = client
                    .get(url)
                    .header(ACCEPT, TURTLE_MEDIA_TYPE)
                    .query(query);
                if let Some(timeout) = timeout {
                    req = req.timeout(timeout);
                }
                req
            })
            .map_err(|e| TriplestoreError::RetrievalError {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TriplestoreError::RetrievalError {
                url: url.to_string(),
                message: format!("HTTP status {}", status),
            });
        }
        resp.text().map_err(|e| TriplestoreError::RetrievalError {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Status of a HEAD request to `url`, following redirects.
    pub fn head_status(&self, url: &str, timeout: Duration) -> Result<u16, reqwest::Error> {
        let resp = self.send_with_retry(|client| client.head(url).timeout(timeout))?;
        Ok(resp.status().as_u16())
    }
}
