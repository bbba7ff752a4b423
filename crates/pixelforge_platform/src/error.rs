//! Platform error types

use thiserror::Error;

/// Errors surfaced by platform resource handles
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Reading a value from the preference store failed
    #[error("storage read failed: {0}")]
    StorageRead(String),

    /// Writing a value to the preference store failed
    #[error("storage write failed: {0}")]
    StorageWrite(String),

    /// The requested platform resource is not available
    #[error("platform resource unavailable: {0}")]
    Unavailable(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
