//! Facet engine error types.
//!
//! Engine operations never fail. These errors only surface at the edges,
//! where catalog JSON, configuration TOML or presentation strings are
//! converted into typed values.

use thiserror::Error;

/// Errors that can occur while building engine inputs.
#[derive(Error, Debug)]
pub enum FacetError {
    /// Catalog payload could not be decoded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Configuration could not be decoded.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Composite size key is not of the form `<token>-pad` / `<token>-cloth`.
    #[error("Invalid size key: {0}")]
    InvalidSizeKey(String),

    /// Category selector is not recognized.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Filter dimension is not recognized.
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// Sort mode is not recognized.
    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    /// Apparel type is not recognized.
    #[error("Unknown apparel type: {0}")]
    UnknownApparelType(String),
}
