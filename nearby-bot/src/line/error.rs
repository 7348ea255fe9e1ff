//! Messaging API client error types.

/// Errors from the LINE Messaging API client.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Channel access token is not a valid header value
    #[error("invalid channel access token")]
    InvalidToken,

    /// Channel access token rejected
    #[error("unauthorized: check LINE_CHANNEL_ACCESS_TOKEN")]
    Unauthorized,
}
