//! Error types for the menu component.

use std::path::PathBuf;

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

/// Errors that can occur while building a menu or loading its configuration.
///
/// Rendering itself never fails: malformed node metadata falls back to
/// defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// The menu was constructed with no nodes.
    #[error("menu options must contain at least one node")]
    EmptyOptions,

    /// File I/O error.
    #[error("Failed to read menu config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error.
    #[error("Invalid JSON menu config: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("Invalid TOML menu config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config file extension is neither `.json` nor `.toml`.
    #[error("Unsupported menu config format '{path}': expected .json or .toml")]
    UnsupportedFormat { path: PathBuf },
}

impl MenuError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
