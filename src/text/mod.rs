// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by indexing and querying.
//!
//! Mixed-script pages are the norm for this corpus: the same Persian word
//! shows up with Arabic kaf/yeh, Persian digits sit next to ASCII ones, and
//! zero-width joiners are sprinkled everywhere. Everything funnels through
//! one normalizer so a query and a page agree on every token.

mod normalizer;
pub(crate) mod tables;

pub use normalizer::{normalize, tokenize};
