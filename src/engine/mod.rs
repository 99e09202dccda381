// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: load once, answer forever.
//!
//! ```text
//! CorpusSource ─▶ TextExtractor ─▶ Documents ─▶ CorpusIndex ─▶ Resolver
//!                                      │                          │
//!                                      ▼                          ▼
//!                                 SearchItems ◀──── ordinals ◀── search()
//!                                                                 │
//!                                                        QueryCache (4..=100 chars)
//! ```
//!
//! Everything is built synchronously in [`QueryEngine::load`] and is
//! read-only afterward, so a single engine can sit behind an `Arc` and serve
//! any number of threads. The only mutable state is the cache and a few
//! counters.
//!
//! Queries shorter than 4 chars are cheap to run and pollute the cache;
//! queries longer than 100 are almost never repeated. Both bypass it.

pub mod cache;

pub use cache::QueryCache;

use crate::config::EngineConfig;
use crate::corpus::{load_documents, CorpusSource, TextExtractor};
use crate::error::Result;
use crate::index::{CorpusIndex, IndexStats};
use crate::inverted::DocId;
use crate::search::Resolver;
use crate::text::tokenize;
use crate::types::{Document, ResultStats, SearchItem, SearchResponse, SearchResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Snapshot of the engine's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineMetrics {
    /// Calls to `search`, blank ones included.
    pub queries: u64,
    /// Queries actually resolved against the index.
    pub computations: u64,
    /// Cacheable queries answered without computing.
    pub cache_hits: u64,
    /// Current cache size.
    pub cached_entries: usize,
}

#[derive(Debug, Default)]
struct Counters {
    queries: AtomicU64,
    computations: AtomicU64,
    cache_hits: AtomicU64,
}

#[derive(Debug)]
pub struct QueryEngine {
    items: Vec<SearchItem>,
    resolver: Resolver,
    cache: QueryCache<Arc<[SearchItem]>>,
    config: EngineConfig,
    counters: Counters,
}

impl QueryEngine {
    /// Read, extract, and index a corpus.
    ///
    /// Fails only if the configuration is invalid or the source can't be
    /// read; pages that fail extraction are skipped.
    pub fn load(source: &dyn CorpusSource, extractor: &dyn TextExtractor, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        log::info!("Reading page data");
        let pages = source.load_all_pages()?;

        log::info!("Extracting items from {} pages", pages.len());
        let documents = load_documents(&pages, extractor);
        if documents.len() < pages.len() {
            log::warn!("{} pages had no extractable text", pages.len() - documents.len());
        }

        Self::from_documents(documents, config)
    }

    /// Index documents that are already extracted. Ordinals are reassigned
    /// to match slice order.
    pub fn from_documents(mut documents: Vec<Document>, config: EngineConfig) -> Result<Self> {
        config.validate()?;

        for (i, doc) in documents.iter_mut().enumerate() {
            doc.ordinal = i as DocId;
        }

        let items = documents
            .iter()
            .map(|doc| SearchItem::from_document(doc, config.description_max_chars))
            .collect();

        log::info!("Building indexes");
        let index = CorpusIndex::build(&documents);
        log::info!("Engine ready: {}", index.stats());

        Ok(Self {
            items,
            resolver: Resolver::new(index),
            cache: QueryCache::new(config.cache_capacity),
            config,
            counters: Counters::default(),
        })
    }

    /// Run a query. Blank queries return nothing without touching the index.
    pub fn search(&self, query: &str) -> SearchResult {
        let started = Instant::now();
        self.counters.queries.fetch_add(1, Ordering::Relaxed);

        if query.trim().is_empty() {
            return SearchResult::empty();
        }

        let items = if self.config.is_cacheable_len(query.chars().count()) {
            self.search_cached(query)
        } else {
            self.execute(query)
        };

        SearchResult {
            stats: ResultStats {
                duration_ms: started.elapsed().as_millis() as u64,
                result_count: items.len(),
            },
            items,
        }
    }

    /// Run a query at the request boundary: a panic becomes an error response.
    pub fn respond(&self, query: &str) -> SearchResponse {
        guarded(query, || self.search(query))
    }

    pub fn metrics(&self) -> EngineMetrics {
        EngineMetrics {
            queries: self.counters.queries.load(Ordering::Relaxed),
            computations: self.counters.computations.load(Ordering::Relaxed),
            cache_hits: self.counters.cache_hits.load(Ordering::Relaxed),
            cached_entries: self.cache.len(),
        }
    }

    pub fn index_stats(&self) -> IndexStats {
        self.resolver.index().stats()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Is this exact query string cached?
    pub fn is_cached(&self, query: &str) -> bool {
        self.cache.contains(query)
    }

    fn search_cached(&self, query: &str) -> Arc<[SearchItem]> {
        let mut computed = false;
        let items = self.cache.get_or_compute(query, || {
            computed = true;
            self.execute(query)
        });
        if !computed {
            self.counters.cache_hits.fetch_add(1, Ordering::Relaxed);
        }
        items
    }

    fn execute(&self, query: &str) -> Arc<[SearchItem]> {
        self.counters.computations.fetch_add(1, Ordering::Relaxed);
        let tokens = tokenize(query);
        self.resolver
            .find_matching(&tokens)
            .into_iter()
            .filter_map(|id| self.items.get(id as usize).cloned())
            .collect()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "internal error while resolving query".to_string()
    }
}

/// Run `search`, turning a panic into an error envelope.
fn guarded<F>(query: &str, search: F) -> SearchResponse
where
    F: FnOnce() -> SearchResult,
{
    match panic::catch_unwind(AssertUnwindSafe(search)) {
        Ok(data) => SearchResponse::Success { data },
        Err(payload) => {
            let error_message = panic_message(payload.as_ref());
            log::error!("query {:?} failed: {}", query, error_message);
            SearchResponse::Error { error_message }
        }
    }
}
