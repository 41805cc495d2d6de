use std::fmt;

/// Result type for trendscope-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the trends backend
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, ...)
    Http(reqwest::Error),

    /// Non-2xx response. `message` is the user-visible text, already
    /// following the endpoint's contract (status line for fetch, server
    /// `error` body for refresh).
    Status { status: u16, message: String },

    /// 2xx response whose body could not be decoded
    Decode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "request failed: {}", err),
            Error::Status { message, .. } => write!(f, "{}", message),
            Error::Decode(err) => write!(f, "invalid response body: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
