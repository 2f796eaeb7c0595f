use reqwest::Client;
use std::{env, path::PathBuf, str::FromStr, sync::Arc, time::Duration};
use tracing::info;

use crate::services::fetch_service::{CountryFetcher, HttpFetcher, DEFAULT_COUNTRIES_URL};

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn CountryFetcher>,
    pub cases_path: PathBuf,
    pub report_path: PathBuf,
    pub max_failures: usize,
    pub response_bound: Duration,
}

pub struct AppConfig {
    pub countries_url: String,
    pub external_timeout_ms: u64,
    pub response_bound_ms: u64,
    pub cases_path: PathBuf,
    pub max_failures: usize,
    pub report_path: PathBuf,
}

// Unset falls back to the default; set but unparsable is an error.
fn parse_var<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is invalid ({:?}): {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let countries_url =
            env::var("COUNTRIES_URL").unwrap_or_else(|_| DEFAULT_COUNTRIES_URL.into());
        let external_timeout_ms: u64 = parse_var("EXTERNAL_TIMEOUT_MS", 5_000)?;
        let response_bound_ms: u64 = parse_var("RESPONSE_BOUND_MS", 3_000)?;
        let max_failures: usize = parse_var("MAX_FAILURES", 3)?;
        let cases_path =
            PathBuf::from(env::var("CASES_PATH").unwrap_or_else(|_| "test_data.csv".into()));
        let report_path =
            PathBuf::from(env::var("REPORT_PATH").unwrap_or_else(|_| "report.json".into()));

        if external_timeout_ms == 0 {
            anyhow::bail!("EXTERNAL_TIMEOUT_MS must be greater than 0");
        }

        Ok(Self {
            countries_url,
            external_timeout_ms,
            response_bound_ms,
            cases_path,
            max_failures,
            report_path,
        })
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        let timeout = Duration::from_millis(self.external_timeout_ms);

        // http client
        let http = Client::builder().timeout(timeout).build()?;
        info!("target {} (timeout {} ms)", self.countries_url, self.external_timeout_ms);

        Ok(AppState {
            fetcher: Arc::new(HttpFetcher::new(http, self.countries_url.clone(), timeout)),
            cases_path: self.cases_path.clone(),
            report_path: self.report_path.clone(),
            max_failures: self.max_failures,
            response_bound: Duration::from_millis(self.response_bound_ms),
        })
    }
}
