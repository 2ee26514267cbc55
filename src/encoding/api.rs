//! Public API for the encoding registry
//!
//! This module provides the complete public API for the encoding system.
//! External modules should import from here rather than directly from
//! internal modules. Consumers request encodings by name; providers
//! contribute constructor tables through the `provider!` macro.

use std::sync::{Arc, LazyLock};

// Core registry
pub use crate::encoding::registry::EncodingRegistry;

// Error handling
pub use crate::encoding::error::{EncodingError, EncodingResult};

// Encoding types and configuration
pub use crate::encoding::types::{
    Constructor, ConstructorTable, Encoding, EncodingConfig, ProviderInfo,
};

// Provider contract and registration
pub use crate::encoding::discovery::ProviderEntry;
pub use crate::encoding::traits::EncodingProvider;

/// Global encoding registry instance
static ENCODING_SERVICE: LazyLock<Arc<EncodingRegistry>> = LazyLock::new(|| {
    log::trace!("Initializing encoding registry service");
    Arc::new(EncodingRegistry::new())
});

/// Access the encoding registry service
///
/// Returns the process-wide registry backed by all providers registered
/// through the `provider!` macro. Each call returns the same shared
/// instance. Tests needing isolation should construct their own registry
/// via [`EncodingRegistry::with_providers`] instead.
pub fn get_encoding_service() -> Arc<EncodingRegistry> {
    Arc::clone(&ENCODING_SERVICE)
}

/// Get an encoding by name from the process-wide registry
///
/// # Examples
/// ```no_run
/// use tokreg::encoding::api::get_encoding;
///
/// let encoding = get_encoding("cl100k_base")?;
/// assert_eq!(encoding.name(), "cl100k_base");
/// # Ok::<(), tokreg::encoding::api::EncodingError>(())
/// ```
pub fn get_encoding(encoding_name: &str) -> EncodingResult<Arc<Encoding>> {
    ENCODING_SERVICE.get_encoding(encoding_name)
}

/// List every encoding name known across all providers
pub fn list_encoding_names() -> EncodingResult<Vec<String>> {
    ENCODING_SERVICE.list_encoding_names()
}
