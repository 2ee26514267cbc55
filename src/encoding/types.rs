//! Type definitions for the encoding registry
//!
//! This module contains the core data structures used throughout
//! the encoding system: provider metadata, constructor tables, the
//! configuration mapping a constructor produces, and the encoding
//! instance built from it.

use crate::encoding::error::{EncodingError, EncodingResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Provider metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub api_version: u32,
}

/// Zero-argument factory producing the configuration for one encoding
pub type Constructor = Arc<dyn Fn() -> EncodingResult<EncodingConfig> + Send + Sync>;

/// Mapping from encoding name to its constructor
pub type ConstructorTable = HashMap<String, Constructor>;

/// Configuration mapping produced by a constructor
///
/// Carries everything needed to assemble an [`Encoding`]. Provider-defined
/// values that fall outside the known fields go in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Encoding name; must match the name the constructor was registered under
    pub name: String,
    /// Regex pattern splitting text into mergeable units
    pub pattern: String,
    /// Token string to rank mapping for ordinary tokens
    #[serde(default)]
    pub mergeable_ranks: HashMap<String, u32>,
    /// Reserved token string to id mapping
    #[serde(default)]
    pub special_tokens: HashMap<String, u32>,
    /// Declared total vocabulary size, validated against the token maps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_vocab_size: Option<usize>,
    /// Provider-defined values outside the known fields
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl EncodingConfig {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            mergeable_ranks: HashMap::new(),
            special_tokens: HashMap::new(),
            explicit_vocab_size: None,
            extra: HashMap::new(),
        }
    }
}

/// A fully constructed encoding instance
///
/// Immutable once built; shared between callers as `Arc<Encoding>`.
/// Tokenization internals live outside this layer - the registry only
/// guarantees the instance was assembled from a valid configuration.
#[derive(Debug)]
pub struct Encoding {
    name: String,
    pattern: String,
    mergeable_ranks: HashMap<String, u32>,
    special_tokens: HashMap<String, u32>,
    vocab_size: usize,
    max_token_value: u32,
}

impl Encoding {
    /// Assemble an encoding from its configuration mapping
    ///
    /// Validates that the name is non-empty and, when an explicit
    /// vocabulary size is declared, that it matches the token maps and
    /// that token values are contiguous up to it.
    pub fn from_config(config: EncodingConfig) -> EncodingResult<Self> {
        if config.name.is_empty() {
            return Err(EncodingError::Construction {
                name: config.name,
                message: "encoding name must not be empty".to_string(),
            });
        }

        let vocab_size = config.mergeable_ranks.len() + config.special_tokens.len();
        let max_token_value = config
            .mergeable_ranks
            .values()
            .chain(config.special_tokens.values())
            .copied()
            .max()
            .unwrap_or(0);

        if let Some(explicit) = config.explicit_vocab_size {
            if explicit != vocab_size {
                return Err(EncodingError::Construction {
                    name: config.name,
                    message: format!(
                        "explicit vocabulary size {} does not match {} declared tokens",
                        explicit, vocab_size
                    ),
                });
            }
            if max_token_value as usize != vocab_size.saturating_sub(1) {
                return Err(EncodingError::Construction {
                    name: config.name,
                    message: format!(
                        "token values are not contiguous: max value {} for vocabulary size {}",
                        max_token_value, vocab_size
                    ),
                });
            }
        }

        Ok(Self {
            name: config.name,
            pattern: config.pattern,
            mergeable_ranks: config.mergeable_ranks,
            special_tokens: config.special_tokens,
            vocab_size,
            max_token_value,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn max_token_value(&self) -> u32 {
        self.max_token_value
    }

    /// Rank of an ordinary token, if present
    pub fn rank(&self, token: &str) -> Option<u32> {
        self.mergeable_ranks.get(token).copied()
    }

    /// Id of a reserved token, if present
    pub fn special_token(&self, token: &str) -> Option<u32> {
        self.special_tokens.get(token).copied()
    }
}
