use std::path::Path;

use crate::models::case::TestCase;
use crate::utils::error::SuiteError;

pub async fn load_cases(path: &Path) -> Result<Vec<TestCase>, SuiteError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SuiteError::Data(format!("could not read {}: {}", path.display(), e)))?;
    parse_cases(&text)
}

/// First line is a header. Column 1 must be exactly `True` to mean present.
pub fn parse_cases(text: &str) -> Result<Vec<TestCase>, SuiteError> {
    let mut cases = Vec::new();
    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let mut cols = line.split(',');
        let (Some(subject), Some(flag)) = (cols.next(), cols.next()) else {
            return Err(SuiteError::Data(format!(
                "line {}: expected `name,exists`, got {:?}",
                idx + 1,
                line
            )));
        };
        cases.push(TestCase::new(subject, flag == "True"));
    }
    Ok(cases)
}
