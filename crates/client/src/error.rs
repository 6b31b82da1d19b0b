//! Client error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures talking to a roofquote server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server could not be reached or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// `error` field of the JSON body when present.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

impl ClientError {
    /// True for 4xx answers, i.e. the request itself was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClientError::Server { status, .. } if (400..500).contains(status))
    }
}
