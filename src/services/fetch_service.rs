use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::utils::error::SuiteError;

pub const DEFAULT_COUNTRIES_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,capital,population,flags";

/// Decoded body of one fetch plus the wall time the request took.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub body: Value,
    pub elapsed: Duration,
}

/// Source of country payloads. Every call must hit the source again.
#[async_trait]
pub trait CountryFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Fetched, SuiteError>;

    fn target(&self) -> &str;
}

pub struct HttpFetcher {
    http: Client,
    url: String,
    timeout: Duration,
}

impl HttpFetcher {
    /// `http` must already carry `timeout`; it is kept here for messages only.
    pub fn new(http: Client, url: impl Into<String>, timeout: Duration) -> Self {
        Self { http, url: url.into(), timeout }
    }

    fn describe(&self, e: reqwest::Error) -> String {
        if e.is_timeout() {
            format!("request timed out after {:.3} seconds: {}", self.timeout.as_secs_f64(), e)
        } else {
            e.to_string()
        }
    }

    fn failed(&self, msg: String) -> SuiteError {
        error!("API request failed: {}", msg);
        SuiteError::Fetch(format!("API request failed: {}", msg))
    }
}

#[async_trait]
impl CountryFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<Fetched, SuiteError> {
        // elapsed covers the full body download, not just the headers
        let start = Instant::now();
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.failed(self.describe(e)))?;
        let bytes = resp.bytes().await.map_err(|e| self.failed(self.describe(e)))?;
        let elapsed = start.elapsed();
        info!("Response time: {:.3} seconds", elapsed.as_secs_f64());

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| self.failed(format!("could not decode body: {}", e)))?;

        Ok(Fetched { body, elapsed })
    }

    fn target(&self) -> &str {
        &self.url
    }
}
