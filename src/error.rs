// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading a corpus and configuring the engine.
//!
//! Only startup can fail. Once an engine exists, searching is infallible;
//! a panic inside a query is caught at the request boundary and turned into
//! an error response, not an `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine startup.
pub type Result<T> = std::result::Result<T, EngineError>;

/// The corpus could not be read.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Corpus file could not be opened or read
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is reachable in principle but refused to hand over pages
    #[error("corpus unavailable: {0}")]
    Unavailable(String),
}

/// The engine configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but make no sense together
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid(message.into())
    }
}

/// Anything that stops an engine from being built.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
