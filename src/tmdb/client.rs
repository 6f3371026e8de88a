use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::TmdbError;
use crate::config::TmdbConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// HTTP client for TheMovieDB API.
///
/// Every request carries the API key as a query parameter. Timeouts,
/// connection failures and 5xx answers are retried with a fixed delay until
/// `max_attempts` is reached; other 4xx answers fail immediately.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    max_attempts: u32,
    retry_delay: Duration,
}

enum Attempt {
    Done(Option<Value>),
    Retry(TmdbError),
    Fail(TmdbError),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> crate::tmdb::Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(TmdbError::MissingApiKey)?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TmdbError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            max_attempts: config.max_attempts.max(1),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` relative to the base URL.
    ///
    /// Returns `Ok(None)` when the upstream answers 404.
    pub async fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> crate::tmdb::Result<Option<Value>> {
        let url = self.url(path);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(path = %path, attempt = attempt, "TMDB request");

            match self.attempt(&url, params).await {
                Attempt::Done(payload) => return Ok(payload),
                Attempt::Fail(err) => return Err(err),
                Attempt::Retry(err) => {
                    if attempt >= self.max_attempts {
                        warn!(path = %path, attempts = attempt, error = %err, "TMDB request failed, giving up");
                        return Err(err);
                    }
                    warn!(path = %path, attempt = attempt, error = %err, "TMDB request failed, retrying");
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }

    async fn attempt(&self, url: &str, params: &[(&str, String)]) -> Attempt {
        let response = match self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Attempt::Retry(transport_error(&e)),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Attempt::Done(None);
        }

        if status.is_server_error() {
            return Attempt::Retry(TmdbError::Connection {
                message: format!("TheMovieDB API server error: {}", status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Attempt::Fail(TmdbError::Response {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        match response.bytes().await {
            Ok(body) => match serde_json::from_slice(&body) {
                Ok(payload) => Attempt::Done(Some(payload)),
                Err(e) => Attempt::Fail(TmdbError::Decode(e.to_string())),
            },
            Err(e) => Attempt::Retry(transport_error(&e)),
        }
    }
}

fn transport_error(err: &reqwest::Error) -> TmdbError {
    let message = if err.is_timeout() {
        "Timeout connecting to TheMovieDB API".to_string()
    } else if err.is_connect() {
        "Failed to connect to TheMovieDB API".to_string()
    } else {
        format!("Request failed: {}", err)
    };
    TmdbError::Connection {
        message,
        status: None,
    }
}

/// Pull `status_message` out of an error body. Empty or malformed bodies
/// fall back to the status reason phrase.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        })
}
