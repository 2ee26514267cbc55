//! Encoding Registry
//!
//! Thread-safe registry mapping encoding names to lazily constructed,
//! cached encoding instances. The constructor table is built exactly once
//! per registry from the discovered providers and frozen afterwards; the
//! encoding cache grows monotonically and entries are never replaced.

use crate::core::sync::{handle_mutex_poison, handle_rwlock_read, handle_rwlock_write};
use crate::encoding::discovery::ProviderSource;
use crate::encoding::error::{EncodingError, EncodingResult};
use crate::encoding::traits::EncodingProvider;
use crate::encoding::types::{ConstructorTable, Encoding, ProviderInfo};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

/// Process-scoped registry of named encodings
///
/// One exclusive lock guards the one-time constructor-table build and the
/// check-then-insert transition on the cache. The frozen table and the
/// cached instances are read without taking that lock.
pub struct EncodingRegistry {
    /// Registry API version providers are validated against
    api_version: u32,

    /// Where providers come from (link-time registrations or a fixed set)
    source: ProviderSource,

    /// Memoized result of the first provider enumeration
    providers: OnceLock<Vec<Arc<dyn EncodingProvider>>>,

    /// Constructor table, built once and frozen
    constructors: OnceLock<ConstructorTable>,

    /// Guards the table build and cache insertion
    build_lock: Mutex<()>,

    /// Constructed encodings, keyed by name
    encodings: RwLock<HashMap<String, Arc<Encoding>>>,
}

impl std::fmt::Debug for EncodingRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodingRegistry")
            .field("api_version", &self.api_version)
            .field("constructors_built", &self.constructors.get().is_some())
            .field(
                "cached_encodings",
                &self
                    .encodings
                    .read()
                    .map(|cache| cache.keys().cloned().collect::<Vec<_>>())
                    .unwrap_or_default(),
            )
            .finish()
    }
}

impl EncodingRegistry {
    /// Create a registry backed by providers registered through `provider!`
    pub fn new() -> Self {
        Self::from_source(ProviderSource::Registered)
    }

    /// Create a registry backed by a fixed provider set
    ///
    /// Intended for tests and embedders that manage their own providers;
    /// the registry stays isolated from link-time registrations.
    pub fn with_providers(providers: Vec<Arc<dyn EncodingProvider>>) -> Self {
        Self::from_source(ProviderSource::Fixed(providers))
    }

    fn from_source(source: ProviderSource) -> Self {
        Self {
            api_version: crate::get_registry_api_version(),
            source,
            providers: OnceLock::new(),
            constructors: OnceLock::new(),
            build_lock: Mutex::new(()),
            encodings: RwLock::new(HashMap::new()),
        }
    }

    /// Registry API version used for provider compatibility checks
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Check if a provider API version is compatible
    ///
    /// Same major version (year) is compatible.
    pub fn is_api_compatible(&self, provider_api_version: u32) -> bool {
        major_version(self.api_version) == major_version(provider_api_version)
    }

    /// Enumerate providers, memoizing the first result
    ///
    /// The set is fixed for the registry lifetime regardless of later
    /// registration-state changes.
    fn providers(&self) -> &[Arc<dyn EncodingProvider>] {
        self.providers.get_or_init(|| {
            let providers = self.source.enumerate();
            log::debug!("Discovered {} encoding providers", providers.len());
            providers
        })
    }

    /// Names of all discovered provider modules, sorted
    pub fn discovered_provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .providers()
            .iter()
            .map(|provider| provider.provider_info().name)
            .collect();
        names.sort();
        names
    }

    /// Ensure the constructor table has been built
    ///
    /// Idempotent and safe under concurrent invocation: at most one build
    /// pass executes regardless of how many threads call this before the
    /// first build completes. A failed build publishes nothing, so a later
    /// call retries from scratch.
    pub fn ensure_constructors(&self) -> EncodingResult<()> {
        // Fast path: table already published
        if self.constructors.get().is_some() {
            return Ok(());
        }

        let _guard = handle_mutex_poison(self.build_lock.lock(), |message| {
            EncodingError::LockPoisoned { message }
        })?;
        self.build_constructors_locked().map(|_| ())
    }

    /// Build the constructor table; caller must hold `build_lock`
    ///
    /// Re-checks for a build finished while the caller waited on the lock.
    /// The table is merged into a local map and only published on full
    /// success; partial state from a failed build is discarded.
    fn build_constructors_locked(&self) -> EncodingResult<&ConstructorTable> {
        if let Some(table) = self.constructors.get() {
            return Ok(table);
        }

        let mut merged: ConstructorTable = HashMap::new();
        for provider in self.providers() {
            let info = provider.provider_info();
            self.validate_provider_compatibility(&info)?;

            let table = provider
                .encoding_constructors()
                .map_err(|err| EncodingError::MissingConstructors {
                    provider: info.name.clone(),
                    message: err.to_string(),
                })?;

            for (name, constructor) in table {
                if merged.contains_key(&name) {
                    return Err(EncodingError::DuplicateName {
                        name,
                        provider: info.name.clone(),
                    });
                }
                merged.insert(name, constructor);
            }
            log::trace!("Merged constructor table from provider '{}'", info.name);
        }

        log::debug!("Constructor registry built with {} encodings", merged.len());
        Ok(self.constructors.get_or_init(|| merged))
    }

    /// Validate provider compatibility before merging its table
    fn validate_provider_compatibility(&self, info: &ProviderInfo) -> EncodingResult<()> {
        if !self.is_api_compatible(info.api_version) {
            return Err(EncodingError::VersionIncompatible {
                message: format!(
                    "Provider '{}' has incompatible API version {} (expected major version {})",
                    info.name,
                    info.api_version,
                    major_version(self.api_version)
                ),
            });
        }
        Ok(())
    }

    /// Get an encoding by name, constructing and caching it on first use
    ///
    /// For any given name the constructor executes at most once per
    /// registry lifetime; every concurrent caller observes the same
    /// instance. Construction failures propagate unmodified and cache
    /// nothing, so a later call may retry.
    pub fn get_encoding(&self, name: &str) -> EncodingResult<Arc<Encoding>> {
        // Fast path: published entries are immutable, a read guard suffices
        {
            let cache = handle_rwlock_read(self.encodings.read(), |message| {
                EncodingError::LockPoisoned { message }
            })?;
            if let Some(encoding) = cache.get(name) {
                log::trace!("Cache hit for encoding '{}'", name);
                return Ok(Arc::clone(encoding));
            }
        }

        let _guard = handle_mutex_poison(self.build_lock.lock(), |message| {
            EncodingError::LockPoisoned { message }
        })?;

        // Re-check: another thread may have constructed this entry while
        // this one waited on the lock
        {
            let cache = handle_rwlock_read(self.encodings.read(), |message| {
                EncodingError::LockPoisoned { message }
            })?;
            if let Some(encoding) = cache.get(name) {
                return Ok(Arc::clone(encoding));
            }
        }

        // Build the table directly while holding the lock; going through
        // ensure_constructors here would deadlock on a non-reentrant mutex
        let table = self.build_constructors_locked()?;

        let constructor =
            table
                .get(name)
                .ok_or_else(|| EncodingError::UnknownEncoding {
                    name: name.to_string(),
                    providers: self.discovered_provider_names(),
                })?;

        let config = constructor()?;
        if config.name != name {
            return Err(EncodingError::Construction {
                name: name.to_string(),
                message: format!(
                    "constructor produced configuration for '{}' instead",
                    config.name
                ),
            });
        }

        let encoding = Arc::new(Encoding::from_config(config)?);

        let mut cache = handle_rwlock_write(self.encodings.write(), |message| {
            EncodingError::LockPoisoned { message }
        })?;
        cache.insert(name.to_string(), Arc::clone(&encoding));
        log::debug!("Constructed and cached encoding '{}'", name);

        Ok(encoding)
    }

    /// All encoding names known across all providers, sorted
    ///
    /// Triggers discovery and the table build if they have not run yet.
    /// Returns an owned snapshot, not a live view.
    pub fn list_encoding_names(&self) -> EncodingResult<Vec<String>> {
        // Frozen table reads need no lock once published
        let table = match self.constructors.get() {
            Some(table) => table,
            None => {
                let _guard = handle_mutex_poison(self.build_lock.lock(), |message| {
                    EncodingError::LockPoisoned { message }
                })?;
                self.build_constructors_locked()?
            }
        };

        let mut names: Vec<String> = table.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

impl Default for EncodingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Major component (year) of an API version
fn major_version(api_version: u32) -> u32 {
    api_version / 10000
}
