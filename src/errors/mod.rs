use thiserror::Error;

/// The only two failures a feed load reports to its caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFeedLoaderError {
    #[error("could not reach the feed server")]
    Connectivity,

    #[error("feed returned invalid data")]
    InvalidData,
}

/// Opaque transport failure. Never surfaced past the loader.
#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected value representation: neither data nor error received")]
    UnexpectedValues,

    // Scripted by test doubles
    #[cfg(any(test, feature = "test-util"))]
    #[error("Stubbed transport error: {0}")]
    Stubbed(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Load errors
    #[error("{0}")]
    Load(#[from] RemoteFeedLoaderError),

    #[error("Timed out after {0}s waiting for the feed")]
    Timeout(u64),

    // Output errors
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
