use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::models::case::{CaseOutcome, CaseStatus};

#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub started_at: String,
    pub target: String,
    pub passed: usize,
    pub failed: usize,
    pub not_run: usize,
    pub stopped_early: bool,
    pub duration_ms: u64,
    pub cases: Vec<CaseOutcome>,
}

impl RunReport {
    pub fn new(started_at: String, target: String, cases: Vec<CaseOutcome>, total: usize) -> Self {
        let passed = cases.iter().filter(|c| c.status == CaseStatus::Passed).count();
        let failed = cases.len() - passed;
        let not_run = total.saturating_sub(cases.len());
        Self {
            started_at,
            target,
            passed,
            failed,
            not_run,
            stopped_early: not_run > 0,
            duration_ms: 0,
            cases,
        }
    }

    pub fn success(&self) -> bool {
        self.failed == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} not run in {:.2}s",
            self.passed,
            self.failed,
            self.not_run,
            self.duration_ms as f64 / 1000.0
        )
    }
}

pub async fn write_report(report: &RunReport, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(|e| e.to_string())?;
        }
    }
    let json = serde_json::to_vec_pretty(report).map_err(|e| e.to_string())?;
    fs::write(path, json).await.map_err(|e| e.to_string())?;
    Ok(())
}
