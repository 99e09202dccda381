// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search over crawled web pages, with typo correction.
//!
//! A corpus is loaded once, indexed by title and by body, and then queried
//! with AND semantics. Title matches always rank ahead of body matches, and a
//! single misspelled token gets one chance at a one-edit correction.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   corpus     │────▶│  inverted    │────▶│    index     │
//! │ (JSON Lines, │     │ (token →     │     │ (title, body,│
//! │  HTML text)  │     │  postings)   │     │  catalogue)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    ▲                    │
//!        │             ┌──────────────┐            ▼
//!        │             │    text      │     ┌──────────────┐
//!        │             │ (normalize,  │◀────│   search     │
//!        │             │  tokenize)   │     │ (intersect,  │
//!        │             └──────────────┘     │  correct)    │
//!        ▼                                  └──────────────┘
//! ┌─────────────────────────────────────────────────────────┐
//! │                        engine                           │
//! │     (QueryEngine, single-flight QueryCache, stats)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module      | Responsibility                                        |
//! |-------------|-------------------------------------------------------|
//! | `text`      | Normalization: case, separators, Persian/Arabic forms |
//! | `fuzzy`     | Bounded Levenshtein distance                          |
//! | `inverted`  | Per-field inverted index construction                 |
//! | `index`     | Title/body indices and the correction catalogue       |
//! | `search`    | Multi-list intersection, correction, title priority   |
//! | `engine`    | Loading, caching, timing, response envelope           |
//! | `corpus`    | Page sources and HTML/plain-text extraction           |
//!
//! # Usage
//!
//! ```
//! use searchit::{EngineConfig, Document, QueryEngine};
//!
//! let docs = vec![
//!     Document { ordinal: 0, title: "Cats and Dogs".into(), body: "Cats are great pets".into(), url: "a".into() },
//!     Document { ordinal: 1, title: "Birds".into(), body: "Birds fly high, dogs watch".into(), url: "b".into() },
//! ];
//! let engine = QueryEngine::from_documents(docs, EngineConfig::default()).unwrap();
//!
//! let result = engine.search("dogs");
//! let urls: Vec<&str> = result.items.iter().map(|i| i.url.as_str()).collect();
//! assert_eq!(urls, ["a", "b"]);
//! ```

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod inverted;
pub mod search;
pub mod testing;
pub mod text;
mod types;

pub use config::EngineConfig;
pub use corpus::{
    load_documents, CorpusSource, HtmlExtractor, JsonLinesCorpus, MemoryCorpus, PlainTextExtractor, TextExtractor,
};
pub use engine::{EngineMetrics, QueryCache, QueryEngine};
pub use error::{ConfigError, CorpusError, EngineError};
pub use fuzzy::{is_single_edit, levenshtein, levenshtein_within};
pub use index::{CatalogueEntry, CorpusIndex, IndexStats};
pub use inverted::{build_inverted_index, check_inverted_index_well_formed, DocId, InvertedIndex};
pub use search::{append_new, intersect, Resolver, SortedIntersection};
pub use text::{normalize, tokenize};
pub use types::{Document, ExtractedText, RawPage, ResultStats, SearchItem, SearchResponse, SearchResult};
