//! Shared helpers for encoding registry tests

use crate::encoding::error::{EncodingError, EncodingResult};
use crate::encoding::traits::EncodingProvider;
use crate::encoding::types::{Constructor, ConstructorTable, EncodingConfig, ProviderInfo};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Provider with a fixed constructor table
pub struct StaticProvider {
    name: String,
    api_version: u32,
    constructors: ConstructorTable,
}

impl StaticProvider {
    pub fn new(name: &str, constructors: ConstructorTable) -> Self {
        Self {
            name: name.to_string(),
            api_version: crate::get_registry_api_version(),
            constructors,
        }
    }

    pub fn with_api_version(name: &str, api_version: u32, constructors: ConstructorTable) -> Self {
        Self {
            name: name.to_string(),
            api_version,
            constructors,
        }
    }
}

impl EncodingProvider for StaticProvider {
    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo {
            name: self.name.clone(),
            version: "1.0.0".to_string(),
            description: "Static test provider".to_string(),
            author: "Test".to_string(),
            api_version: self.api_version,
        }
    }

    fn encoding_constructors(&self) -> EncodingResult<ConstructorTable> {
        Ok(self
            .constructors
            .iter()
            .map(|(name, ctor)| (name.clone(), Arc::clone(ctor)))
            .collect())
    }
}

/// Provider that cannot supply its constructor table
pub struct BrokenProvider {
    name: String,
}

impl BrokenProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl EncodingProvider for BrokenProvider {
    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo {
            name: self.name.clone(),
            version: "1.0.0".to_string(),
            description: "Provider without a constructor table".to_string(),
            author: "Test".to_string(),
            api_version: crate::get_registry_api_version(),
        }
    }

    fn encoding_constructors(&self) -> EncodingResult<ConstructorTable> {
        Err(EncodingError::MissingConstructors {
            provider: self.name.clone(),
            message: "no table defined".to_string(),
        })
    }
}

/// Minimal valid configuration for `name`
pub fn test_config(name: &str) -> EncodingConfig {
    let mut config = EncodingConfig::new(name, r"\S+");
    config.mergeable_ranks = HashMap::from([("a".to_string(), 0), ("b".to_string(), 1)]);
    config.special_tokens = HashMap::from([("<|end|>".to_string(), 2)]);
    config
}

/// Constructor producing `test_config(name)` and counting invocations
pub fn counting_constructor(name: &str, counter: Arc<AtomicUsize>) -> Constructor {
    let name = name.to_string();
    Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(test_config(&name))
    })
}

/// Constructor producing `test_config(name)`
pub fn simple_constructor(name: &str) -> Constructor {
    let name = name.to_string();
    Arc::new(move || Ok(test_config(&name)))
}

/// Build a constructor table from names
pub fn table_of(names: &[&str]) -> ConstructorTable {
    names
        .iter()
        .map(|name| (name.to_string(), simple_constructor(name)))
        .collect()
}
