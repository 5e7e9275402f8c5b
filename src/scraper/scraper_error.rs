use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("meta tag '{0}' not found on page")]
    MissingToken(&'static str),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
}
