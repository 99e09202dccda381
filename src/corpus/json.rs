// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON Lines corpus files: one crawled page per line.
//!
//! ```text
//! {"url": "https://example.com/a", "html": "<html>...</html>"}
//! {"url": "https://example.com/b", "content": "<html>...</html>"}
//! ```
//!
//! Crawls get interrupted, so a truncated or garbled line is skipped with a
//! warning instead of failing the whole load.

use super::CorpusSource;
use crate::error::CorpusError;
use crate::types::RawPage;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonLinesCorpus {
    path: PathBuf,
}

impl JsonLinesCorpus {
    /// Point at a corpus file. Nothing is read until [`CorpusSource::load_all_pages`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> CorpusError {
        CorpusError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CorpusSource for JsonLinesCorpus {
    fn load_all_pages(&self) -> Result<Vec<RawPage>, CorpusError> {
        if self.path.is_dir() {
            return Err(CorpusError::Unavailable(format!(
                "{} is a directory, expected a JSON Lines file",
                self.path.display()
            )));
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let mut pages = Vec::new();
        let mut skipped = 0usize;

        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<RawPage>(&line) {
                Ok(page) => pages.push(page),
                Err(e) => {
                    skipped += 1;
                    log::warn!("{}:{}: skipping malformed record: {}", self.path.display(), line_no + 1, e);
                }
            }
        }

        if skipped > 0 {
            log::warn!("skipped {} malformed records in {}", skipped, self.path.display());
        }
        Ok(pages)
    }
}
