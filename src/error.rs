use thiserror::Error;

/// Failure while acquiring a round's subject from the upstream API.
///
/// Any variant leaves the round without a subject; the player can always
/// start another round.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("generation url '{0}' has no numeric trailing segment")]
    Generation(String),
    #[error("could not draw a random subject id: {0}")]
    Entropy(#[from] getrandom::Error),
}

impl AcquisitionError {
    /// Wraps a rejected JS promise (or other opaque JS failure).
    pub fn network(value: impl std::fmt::Debug) -> Self {
        Self::Network(format!("{value:?}"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("max_subject_id must be at least 1, got {0}")]
    InvalidMaxId(u32),
}

/// A hint key outside `type`, `habitat`, `height`, `weight`, `generation`
/// (or `gen`).
#[derive(Debug, PartialEq, Eq, Error)]
#[error("unknown hint category '{0}'")]
pub struct UnknownCategory(pub String);
