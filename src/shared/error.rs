use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Query failed with status {status}: {body}")]
    QueryFailed { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FeedError {
    pub fn query_failed(status: u16, body: impl Into<String>) -> Self {
        FeedError::QueryFailed {
            status,
            body: body.into(),
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
