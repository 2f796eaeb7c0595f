use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::models::case::TestCase;
use crate::services::fetch_service::CountryFetcher;
use crate::types::external::RcCountry;
use crate::utils::error::SuiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Common,
    Official,
}

impl NameField {
    fn pick(self, c: &RcCountry) -> Option<&str> {
        let name = c.name.as_ref()?;
        match self {
            NameField::Common => name.common.as_deref(),
            NameField::Official => name.official.as_deref(),
        }
    }
}

/// Rejects anything that is not a JSON array of objects. Fields inside a
/// record are not validated.
pub fn as_countries(body: Value) -> Result<Vec<RcCountry>, SuiteError> {
    if !body.is_array() {
        return Err(SuiteError::Shape("Response is not a list.".into()));
    }
    serde_json::from_value(body)
        .map_err(|e| SuiteError::Shape(format!("Response is not a list of countries: {}", e)))
}

/// Exact match only; a missing name subfield never matches.
pub fn find_country<'a>(
    countries: &'a [RcCountry],
    field: NameField,
    name: &str,
) -> Option<&'a RcCountry> {
    countries.iter().find(|c| field.pick(c) == Some(name))
}

fn presence(found: bool) -> &'static str {
    if found { "present" } else { "absent" }
}

/// Fetches fresh data and checks that `case.subject` is present iff expected.
/// `context` prefixes the mismatch message.
pub async fn check_existence(
    fetcher: &dyn CountryFetcher,
    field: NameField,
    case: &TestCase,
    context: &str,
) -> Result<(), SuiteError> {
    let fetched = fetcher.fetch().await?;
    let countries = as_countries(fetched.body)?;
    let hit = find_country(&countries, field, &case.subject);
    if let Some(c) = hit {
        let flag = c.flags.as_ref().and_then(|f| f.svg.as_deref().or(f.png.as_deref()));
        let flag_alt = c.flags.as_ref().and_then(|f| f.alt.as_deref());
        debug!(
            capital = ?c.capital,
            population = ?c.population,
            flag = ?flag,
            flag_alt = ?flag_alt,
            "matched {}",
            case.subject
        );
    }
    let found = hit.is_some();
    if found != case.expected {
        return Err(SuiteError::Mismatch(format!(
            "{} {}: expected {}, found {}",
            context,
            case.subject,
            presence(case.expected),
            presence(found)
        )));
    }
    Ok(())
}

pub async fn check_response_time(
    fetcher: &dyn CountryFetcher,
    bound: Duration,
) -> Result<Duration, SuiteError> {
    let fetched = fetcher.fetch().await?;
    if fetched.elapsed >= bound {
        return Err(SuiteError::Mismatch(format!(
            "API response time exceeded {:.3} seconds (took {:.3} seconds)",
            bound.as_secs_f64(),
            fetched.elapsed.as_secs_f64()
        )));
    }
    Ok(fetched.elapsed)
}
