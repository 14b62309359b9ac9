use thiserror::Error;

/// Errors that can occur in farm plot simulation.
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Analysis error: {0}")]
    AnalysisError(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Unknown crop: '{0}'")]
    UnknownCrop(String),

    #[error("Unknown soil type: '{0}'")]
    UnknownSoil(String),

    #[error("Optimization failed: {0}")]
    Optimization(String),
}

impl From<toml::de::Error> for FarmError {
    fn from(e: toml::de::Error) -> Self {
        FarmError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for FarmError {
    fn from(e: toml::ser::Error) -> Self {
        FarmError::Toml(e.to_string())
    }
}
