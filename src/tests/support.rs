use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::services::fetch_service::{CountryFetcher, Fetched};
use crate::utils::error::SuiteError;

/// Trimmed `/v3.1/all?fields=name,capital,population,flags` payload.
pub fn countries_fixture() -> Value {
    serde_json::json!([
      {
        "name": {
          "common": "Switzerland",
          "official": "Swiss Confederation",
          "nativeName": { "deu": { "official": "Schweizerische Eidgenossenschaft", "common": "Schweiz" } }
        },
        "capital": ["Bern"],
        "population": 8654622,
        "flags": { "png": "https://flagcdn.com/w320/ch.png", "svg": "https://flagcdn.com/ch.svg", "alt": "A red square flag" }
      },
      {
        "name": { "common": "India", "official": "Republic of India", "nativeName": {} },
        "capital": ["New Delhi"],
        "population": 1380004385,
        "flags": { "png": "https://flagcdn.com/w320/in.png", "svg": "https://flagcdn.com/in.svg" }
      },
      {
        "name": { "common": "Japan", "official": "Japan" },
        "capital": ["Tokyo"],
        "population": 125836021,
        "flags": { "png": "https://flagcdn.com/w320/jp.png", "svg": "https://flagcdn.com/jp.svg" }
      },
      {
        "name": { "common": "Antarctica", "official": "Antarctica" },
        "capital": [],
        "population": 1000,
        "flags": { "png": "https://flagcdn.com/w320/aq.png", "svg": "https://flagcdn.com/aq.svg" }
      }
    ])
}

/// Deterministic fetcher: same body and elapsed time on every call.
pub struct StubFetcher {
    pub body: Value,
    pub elapsed: Duration,
    pub fail_with: Option<String>,
    pub calls: AtomicUsize,
}

impl StubFetcher {
    pub fn ok(body: Value) -> Self {
        Self { body, elapsed: Duration::from_millis(120), fail_with: None, calls: AtomicUsize::new(0) }
    }

    pub fn slow(body: Value, elapsed: Duration) -> Self {
        Self { elapsed, ..Self::ok(body) }
    }

    pub fn failing(msg: &str) -> Self {
        Self { fail_with: Some(msg.to_string()), ..Self::ok(Value::Null) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryFetcher for StubFetcher {
    async fn fetch(&self) -> Result<Fetched, SuiteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.fail_with {
            return Err(SuiteError::Fetch(msg.clone()));
        }
        Ok(Fetched { body: self.body.clone(), elapsed: self.elapsed })
    }

    fn target(&self) -> &str {
        "stub://countries"
    }
}
