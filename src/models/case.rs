use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub subject: String,
    pub expected: bool,
}

impl TestCase {
    pub fn new(subject: impl Into<String>, expected: bool) -> Self {
        Self { subject: subject.into(), expected }
    }

    /// Parametrized label, e.g. `Switzerland-True`.
    pub fn label(&self) -> String {
        let flag = if self.expected { "True" } else { "False" };
        format!("{}-{}", self.subject, flag)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Passed,
    Failed,
}

#[derive(Serialize, Debug, Clone)]
pub struct CaseOutcome {
    pub id: String,
    pub status: CaseStatus,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
