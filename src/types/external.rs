use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
pub struct RcName {
    pub common: Option<String>,
    pub official: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RcFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

/// One element of the `/v3.1/all` payload. Only `name` is checked; every
/// field decodes to `None` when absent, null or of an unexpected type.
#[derive(Deserialize, Debug)]
pub struct RcCountry {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<RcName>,
    #[serde(default, deserialize_with = "lenient")]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub population: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub flags: Option<RcFlags>,
}

fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(d)?;
    Ok(serde_json::from_value(raw).ok())
}
