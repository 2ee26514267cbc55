//! Encoding Registry Error Types

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// A provider could not supply its constructor table
    #[error("Encoding provider '{provider}' does not supply a constructor table: {message}")]
    MissingConstructors { provider: String, message: String },

    /// Two providers declared the same encoding name
    #[error("Duplicate encoding name '{name}' declared by provider '{provider}'")]
    DuplicateName { name: String, provider: String },

    /// Provider API version incompatible with this registry
    #[error("Version incompatible: {message}")]
    VersionIncompatible { message: String },

    /// Requested name is not registered by any provider
    #[error("Unknown encoding '{name}'. Providers found: {providers:?}")]
    UnknownEncoding {
        name: String,
        providers: Vec<String>,
    },

    /// Constructor invocation or encoding assembly failed
    #[error("Failed to construct encoding '{name}': {message}")]
    Construction { name: String, message: String },

    /// A std lock was poisoned by a panicking holder
    #[error("{message}")]
    LockPoisoned { message: String },
}

/// Result type for encoding registry operations
pub type EncodingResult<T> = Result<T, EncodingError>;
