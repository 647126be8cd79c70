use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },

    #[error("Cannot compare {left:?} with {right:?}: component counts differ")]
    ComponentCountMismatch { left: String, right: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything that can go wrong during one check invocation.
///
/// Absorbed in full at the `check_for_new_version` boundary; no variant ever
/// reaches the host tool.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
