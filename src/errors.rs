// errors.rs
use crate::scraper::ScraperError;
use thiserror::Error;

/// Errors that abort a pipeline run. Nothing is recovered locally:
/// the first failing stage ends the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Network error: {0}")]
    Network(#[from] ScraperError),

    #[error("Listing {url} is missing field '{field}'")]
    MissingField { field: &'static str, url: String },

    #[error("Price '{raw}' has no digits")]
    PriceParse { raw: String },

    #[error("Listing {url} has unusable size {size:?}")]
    Division { url: String, size: Option<f64> },

    #[error("Spreadsheet error: {0}")]
    Xlsx(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

