#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid selector `{0}`")]
    Selector(String),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}
