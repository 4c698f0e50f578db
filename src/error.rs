use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Feed returned no data: {0}")]
    EmptyFeed(String),

    #[error("Unknown champion: {0}")]
    UnknownChampion(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
