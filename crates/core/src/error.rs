//! Error types for stylesheet and font downloads.

use std::{io, path::PathBuf, result};

/// Boxed source error from a [`Transport`](crate::transport::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while self-hosting a Google Fonts stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Failed to download the stylesheet. Response status from accessing the Google Font API URL is {status}."
    )]
    StylesheetStatus { status: u16 },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] BoxError),

    #[error("Failed to request {url}. {source}")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to read the response from {url}. {source}")]
    Read {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("The Google Font API response contains no font information.")]
    NoFontFaces,

    #[error("no quoted font-family name in @font-face block: {block}")]
    MissingFamily { block: String },

    #[error("no src url() in @font-face block: {block}")]
    MissingSource { block: String },

    #[error("Failed to download {url}. Response status is {status}.")]
    FontStatus { url: String, status: u16 },

    #[error("Failed to download {url}. {source}")]
    Transfer {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Operation aborted: {0}")]
    Aborted(#[source] Box<Error>),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = result::Result<T, Error>;
