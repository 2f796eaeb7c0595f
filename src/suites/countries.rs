use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::models::case::TestCase;
use crate::services::cases_service::load_cases;
use crate::services::check_service::{check_existence, check_response_time, NameField};
use crate::services::fetch_service::CountryFetcher;
use crate::utils::error::SuiteError;

pub fn common_name_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("Switzerland", true),
        TestCase::new("Mumbai", false),
        TestCase::new("India", true),
    ]
}

pub fn official_name_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("Swiss Confederation", true),
        TestCase::new("Mumbai", false),
        TestCase::new("Republic of India", true),
    ]
}

#[derive(Debug, Clone)]
pub enum CaseKind {
    CommonName(TestCase),
    OfficialName(TestCase),
    DataDriven(TestCase),
    /// The CSV could not be loaded; runs as a single failing case.
    DataUnavailable(String),
    ResponseTime(Duration),
}

#[derive(Debug, Clone)]
pub struct SuiteCase {
    pub id: String,
    pub kind: CaseKind,
}

impl SuiteCase {
    fn param(family: &str, case: &TestCase) -> String {
        format!("{}[{}]", family, case.label())
    }

    pub async fn run(&self, fetcher: &dyn CountryFetcher) -> Result<(), SuiteError> {
        match &self.kind {
            CaseKind::CommonName(case) => {
                check_existence(fetcher, NameField::Common, case, "Unexpected existence check for")
                    .await
            }
            CaseKind::OfficialName(case) => {
                check_existence(
                    fetcher,
                    NameField::Official,
                    case,
                    "Unexpected official name check for",
                )
                .await
            }
            CaseKind::DataDriven(case) => {
                check_existence(fetcher, NameField::Common, case, "Unexpected result for").await
            }
            CaseKind::DataUnavailable(msg) => Err(SuiteError::Data(msg.clone())),
            CaseKind::ResponseTime(bound) => {
                let took = check_response_time(fetcher, *bound).await?;
                info!("API responded in {:.3} seconds", took.as_secs_f64());
                Ok(())
            }
        }
    }
}

/// Builds the full ordered case list: inline tables, CSV rows, then timing.
pub async fn collect(cases_path: &Path, response_bound: Duration) -> Vec<SuiteCase> {
    let mut out: Vec<SuiteCase> = common_name_cases()
        .into_iter()
        .map(|c| SuiteCase {
            id: SuiteCase::param("country_existence", &c),
            kind: CaseKind::CommonName(c),
        })
        .collect();

    out.extend(official_name_cases().into_iter().map(|c| SuiteCase {
        id: SuiteCase::param("official_name", &c),
        kind: CaseKind::OfficialName(c),
    }));

    match load_cases(cases_path).await {
        Ok(rows) => out.extend(rows.into_iter().map(|c| SuiteCase {
            id: SuiteCase::param("data_driven_country_existence", &c),
            kind: CaseKind::DataDriven(c),
        })),
        Err(e) => {
            warn!("data-driven cases unavailable: {}", e);
            out.push(SuiteCase {
                id: "data_driven_country_existence[load]".into(),
                kind: CaseKind::DataUnavailable(e.message().to_string()),
            });
        }
    }

    out.push(SuiteCase {
        id: "api_performance".into(),
        kind: CaseKind::ResponseTime(response_bound),
    });
    out
}
