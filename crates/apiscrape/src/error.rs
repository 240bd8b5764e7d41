#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
