// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded, single-flight LRU cache for query results.
//!
//! Two locks, two jobs:
//!
//! - The table lock (`parking_lot::Mutex`) covers the key → slot map and
//!   the recency index. It is held for a hash lookup and a couple of B-tree
//!   operations, never while a query runs.
//! - Each slot is an `Arc<OnceLock<V>>`. The first caller for a key runs
//!   the computation inside `get_or_init`; concurrent callers for the same
//!   key block on that slot and get the same value. Different keys never
//!   wait on each other.
//!
//! A computation that panics leaves its slot empty, so the next caller for
//! that key computes again. Evicting a slot that is still being computed is
//! fine: waiters hold their own `Arc` and see the value when it lands.

use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

struct Slot<V> {
    cell: Arc<OnceLock<V>>,
    /// Last access, key into `recency`.
    tick: u64,
}

struct CacheState<V> {
    slots: HashMap<String, Slot<V>>,
    /// tick → key, oldest first.
    recency: BTreeMap<u64, String>,
    next_tick: u64,
}

pub struct QueryCache<V> {
    capacity: usize,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> QueryCache<V> {
    /// `capacity` is clamped to at least one entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(CacheState {
                slots: HashMap::new(),
                recency: BTreeMap::new(),
                next_tick: 0,
            }),
        }
    }

    /// Return the cached value for `key`, computing it at most once across
    /// all concurrent callers.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let cell = self.slot(key);
        cell.get_or_init(compute).clone()
    }

    /// Find or create the slot for `key` and mark it most recently used.
    fn slot(&self, key: &str) -> Arc<OnceLock<V>> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let tick = state.next_tick;
        state.next_tick += 1;

        if let Some(slot) = state.slots.get_mut(key) {
            let previous = std::mem::replace(&mut slot.tick, tick);
            let cell = Arc::clone(&slot.cell);
            state.recency.remove(&previous);
            state.recency.insert(tick, key.to_owned());
            return cell;
        }

        let cell = Arc::new(OnceLock::new());
        state.slots.insert(
            key.to_owned(),
            Slot {
                cell: Arc::clone(&cell),
                tick,
            },
        );
        state.recency.insert(tick, key.to_owned());

        // INVARIANT: never more than `capacity` slots
        while state.slots.len() > self.capacity {
            let Some((_, oldest)) = state.recency.pop_first() else {
                break;
            };
            state.slots.remove(&oldest);
        }

        cell
    }

    /// Is a computed value held for `key`? Does not touch recency.
    pub fn contains(&self, key: &str) -> bool {
        self.state
            .lock()
            .slots
            .get(key)
            .is_some_and(|slot| slot.cell.get().is_some())
    }

    /// Number of slots, including ones still being computed.
    pub fn len(&self) -> usize {
        self.state.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<V> std::fmt::Debug for QueryCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("capacity", &self.capacity)
            .field("len", &self.state.lock().slots.len())
            .finish()
    }
}
