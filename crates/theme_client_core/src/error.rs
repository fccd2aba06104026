#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("theme not found")]
    NotFound,

    #[error("draft storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
