#[derive(Debug, thiserror::Error)]
pub enum PricechartingError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("PriceCharting returned {status_code}")]
    Api { status_code: u16 },

    #[error("Failed to parse HTML: {0}")]
    Parse(String),
}
