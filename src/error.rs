use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipError {
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to start fetch runtime: {0}")]
    Runtime(String),
}

impl From<std::io::Error> for SkipError {
    fn from(err: std::io::Error) -> Self {
        SkipError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SkipError {
    fn from(err: serde_json::Error) -> Self {
        SkipError::InvalidResponse(err.to_string())
    }
}
