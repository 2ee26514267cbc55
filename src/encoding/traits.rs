//! Provider trait for the encoding registry
//!
//! A provider is the unit of contribution: it declares metadata and a
//! table of name to constructor entries. Providers register themselves
//! through the `provider!` macro and are enumerated by discovery.

use crate::encoding::error::EncodingResult;
use crate::encoding::types::{ConstructorTable, ProviderInfo};

/// Contract every encoding provider must fulfil
pub trait EncodingProvider: Send + Sync {
    /// Provider metadata used for diagnostics and compatibility checks
    fn provider_info(&self) -> ProviderInfo;

    /// The name to constructor entries this provider contributes
    ///
    /// Called once during the registry build. A provider that cannot
    /// supply its table returns an error, which aborts the build and
    /// surfaces as a configuration failure naming the provider.
    fn encoding_constructors(&self) -> EncodingResult<ConstructorTable>;
}
