use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("fetch_failed: {0}")]
    Fetch(String),
    #[error("shape: {0}")]
    Shape(String),
    #[error("mismatch: {0}")]
    Mismatch(String),
    #[error("data: {0}")]
    Data(String),
}

impl SuiteError {
    /// Message shown next to a failed case, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            SuiteError::Fetch(msg)
            | SuiteError::Shape(msg)
            | SuiteError::Mismatch(msg)
            | SuiteError::Data(msg) => msg,
        }
    }
}
