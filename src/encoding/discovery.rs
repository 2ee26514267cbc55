//! Provider discovery for the encoding registry
//!
//! Providers announce themselves at link time through the `provider!`
//! macro. Discovery is an enumeration over those registrations rather
//! than any form of filesystem scanning, and each registry memoizes the
//! result of its first enumeration for the rest of its lifetime.

use crate::encoding::traits::EncodingProvider;
use std::sync::Arc;

/// Entry for an encoding provider in the link-time registry
pub struct ProviderEntry {
    pub factory: fn() -> Arc<dyn EncodingProvider>,
}

// Collect all provider entries
inventory::collect!(ProviderEntry);

/// Macro for registering encoding providers
///
/// # Examples
/// ```ignore
/// tokreg::provider!(|| std::sync::Arc::new(MyProvider));
/// ```
#[macro_export]
macro_rules! provider {
    ($factory_expr:expr) => {
        inventory::submit!($crate::encoding::api::ProviderEntry {
            factory: $factory_expr,
        });
    };
}

/// Where a registry draws its providers from
///
/// The default registry enumerates link-time registrations; tests inject
/// a fixed set so they stay isolated from global state.
pub(crate) enum ProviderSource {
    /// Providers registered through the `provider!` macro
    Registered,
    /// A fixed provider set supplied at registry construction
    Fixed(Vec<Arc<dyn EncodingProvider>>),
}

impl ProviderSource {
    /// Enumerate the providers this source supplies
    pub(crate) fn enumerate(&self) -> Vec<Arc<dyn EncodingProvider>> {
        match self {
            ProviderSource::Registered => inventory::iter::<ProviderEntry>()
                .map(|entry| (entry.factory)())
                .collect(),
            ProviderSource::Fixed(providers) => providers.clone(),
        }
    }
}
