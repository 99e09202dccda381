// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is
//! a valid configuration:
//!
//! ```json
//! { "cacheCapacity": 100000, "cacheMinQueryLen": 4, "cacheMaxQueryLen": 100, "descriptionMaxChars": 500 }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CACHE_CAPACITY: usize = 100_000;
pub const DEFAULT_CACHE_MIN_QUERY_LEN: usize = 4;
pub const DEFAULT_CACHE_MAX_QUERY_LEN: usize = 100;
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 500;

/// Tunables for a [`crate::QueryEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum number of cached queries before LRU eviction
    pub cache_capacity: usize,
    /// Shortest query (in chars) that goes through the cache
    pub cache_min_query_len: usize,
    /// Longest query (in chars) that goes through the cache
    pub cache_max_query_len: usize,
    /// Body prefix length (in chars) used as the item description
    pub description_max_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_min_query_len: DEFAULT_CACHE_MIN_QUERY_LEN,
            cache_max_query_len: DEFAULT_CACHE_MAX_QUERY_LEN,
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values for basic sanity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::invalid("cacheCapacity must be > 0"));
        }
        if self.cache_min_query_len > self.cache_max_query_len {
            return Err(ConfigError::invalid(format!(
                "cacheMinQueryLen ({}) exceeds cacheMaxQueryLen ({})",
                self.cache_min_query_len, self.cache_max_query_len
            )));
        }
        Ok(())
    }

    /// Does a query of `len` chars go through the cache?
    #[inline]
    pub fn is_cacheable_len(&self, len: usize) -> bool {
        (self.cache_min_query_len..=self.cache_max_query_len).contains(&len)
    }
}
