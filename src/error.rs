//! Fetch Errors
//!
//! The catalog can fail in two ways: the request never produced a usable
//! response (transport, including non-2xx statuses), or the body did not
//! decode into the expected shape.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response arrived with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }

    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        if self.is_decode() {
            "decode"
        } else {
            "transport"
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
