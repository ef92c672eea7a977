//! Error values carried through the model and surfaced to the view.

use std::path::PathBuf;

use thiserror::Error;

use crate::PhotoId;

/// Failure of a single feed load.
///
/// These are plain values: the fetcher returns them, the reducer stores them in
/// the [`Model`](crate::Model), and the view selects a message from
/// [`kind`](Self::kind). Nothing here is ever retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("malformed feed payload: {0}")]
    MalformedPayload(String),

    #[error("feed contains photo id {0} more than once")]
    DuplicatePhotoId(PhotoId),

    #[error("feed request failed: {0}")]
    Transport(String),

    #[error("feed request returned HTTP status {0}")]
    BadStatus(u16),
}

/// Coarse classification used only to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedPayload,
    DuplicateId,
    TransportFailure,
}

impl FeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::MalformedPayload(_) => ErrorKind::MalformedPayload,
            FeedError::DuplicatePhotoId(_) => ErrorKind::DuplicateId,
            FeedError::Transport(_) | FeedError::BadStatus(_) => ErrorKind::TransportFailure,
        }
    }
}

impl ErrorKind {
    /// Static message shown in place of the feed.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::MalformedPayload | ErrorKind::DuplicateId => {
                "Sorry, we couldn't process your feed at this time. We're working on it!"
            }
            ErrorKind::TransportFailure => {
                "Sorry, we couldn't load your feed at this time. Please try again later."
            }
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::MalformedPayload(err.to_string())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {message}")]
    Invalid { message: String },
}
