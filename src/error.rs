//! Error types for the Airship client

/// Errors that can occur while building or sending an Airship request
#[derive(Debug, thiserror::Error)]
pub enum AirshipError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Airship returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias for Airship client operations
pub type Result<T> = std::result::Result<T, AirshipError>;
