use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::models::case::{CaseOutcome, CaseStatus};
use crate::services::fetch_service::CountryFetcher;
use crate::suites::countries::SuiteCase;
use crate::utils::report::RunReport;

pub struct Runner {
    fetcher: Arc<dyn CountryFetcher>,
    /// Stop after this many failed cases; `0` runs everything.
    max_failures: usize,
}

impl Runner {
    pub fn new(fetcher: Arc<dyn CountryFetcher>, max_failures: usize) -> Self {
        Self { fetcher, max_failures }
    }

    /// Runs cases one at a time, in order.
    pub async fn run(&self, cases: &[SuiteCase]) -> RunReport {
        let started_at = Utc::now().to_rfc3339();
        let run_start = Instant::now();
        let mut outcomes = Vec::with_capacity(cases.len());
        let mut failures = 0usize;

        info!("collected {} cases against {}", cases.len(), self.fetcher.target());

        for case in cases {
            let start = Instant::now();
            let result = case.run(self.fetcher.as_ref()).await;
            let duration_ms = start.elapsed().as_millis() as u64;

            let outcome = match result {
                Ok(()) => {
                    info!("PASSED {}", case.id);
                    CaseOutcome { id: case.id.clone(), status: CaseStatus::Passed, duration_ms, message: None }
                }
                Err(e) => {
                    error!("FAILED {} - {}", case.id, e.message());
                    failures += 1;
                    CaseOutcome {
                        id: case.id.clone(),
                        status: CaseStatus::Failed,
                        duration_ms,
                        message: Some(e.to_string()),
                    }
                }
            };
            outcomes.push(outcome);

            if self.max_failures > 0 && failures >= self.max_failures {
                warn!("stopping after {} failures", failures);
                break;
            }
        }

        let mut report = RunReport::new(
            started_at,
            self.fetcher.target().to_string(),
            outcomes,
            cases.len(),
        );
        report.duration_ms = run_start.elapsed().as_millis() as u64;
        report
    }
}
