// src/error.rs

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input that is not a member list, or an out-of-range parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown chamber: {0} (expected house or senate)")]
    UnknownChamber(String),

    #[error("unknown party code: {0}")]
    UnknownParty(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("no API key configured (set CONGRESS_API_KEY or api_key in the config file)")]
    MissingApiKey,

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
