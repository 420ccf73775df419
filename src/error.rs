//! Error types for the news panel.
//!
//! The panel distinguishes failure causes internally (for logging) while the
//! user-visible status line collapses all of them into one generic message.

use thiserror::Error;

/// Everything that can go wrong between pressing the button and seeing cards.
#[derive(Error, Debug)]
pub enum PanelError {
    /// The request never produced a response (connect, DNS, TLS, body read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, PanelError>;
