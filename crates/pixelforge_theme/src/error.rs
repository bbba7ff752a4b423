//! Theme error types

use thiserror::Error;

/// Errors from the theming layer
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A token override document failed to parse
    #[error("invalid token override document: {0}")]
    Parse(#[from] toml::de::Error),
}
