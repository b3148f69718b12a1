use thiserror::Error;

/// Every way a recommendation request can end without results.
///
/// `Display` is the text shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Empty(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
