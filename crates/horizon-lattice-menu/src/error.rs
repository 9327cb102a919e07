//! Error types for menu composition.
//!
//! Merging and unmerging never fail; these errors only come from the edges
//! where text is turned into descriptors, configuration, or JSON output.

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading descriptors or configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A menu descriptor could not be parsed.
    #[error("Invalid menu descriptor: {0}")]
    Descriptor(#[source] serde_json::Error),

    /// The menu tree could not be rendered to JSON.
    #[error("Failed to serialize menu tree: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Menu configuration could not be parsed.
    #[error("Invalid menu configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Create a descriptor error.
    pub fn descriptor(source: serde_json::Error) -> Self {
        Self::Descriptor(source)
    }

    /// Create a serialization error.
    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize(source)
    }
}
