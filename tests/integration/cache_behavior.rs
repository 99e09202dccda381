//! Result cache: single flight, bypass lengths, LRU bound.

use crate::common::{engine_from, pets_corpus, pets_engine};
use searchit::{EngineConfig, QueryCache, QueryEngine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

#[test]
fn concurrent_identical_queries_compute_once() {
    let cache: Arc<QueryCache<usize>> = Arc::new(QueryCache::new(16));
    let calls = Arc::new(AtomicUsize::new(0));
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.get_or_compute("same query", || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(50));
                    7
                })
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 7);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn different_keys_do_not_block_each_other() {
    let cache: Arc<QueryCache<&'static str>> = Arc::new(QueryCache::new(16));
    let started = Arc::new(Barrier::new(2));

    // The slow key waits until the fast key has been computed; if keys
    // serialized on one lock this would deadlock.
    let slow = {
        let cache = Arc::clone(&cache);
        let started = Arc::clone(&started);
        thread::spawn(move || {
            cache.get_or_compute("slow", || {
                started.wait();
                while !cache_has(&cache, "fast") {
                    thread::sleep(Duration::from_millis(1));
                }
                "slow"
            })
        })
    };

    started.wait();
    assert_eq!(cache.get_or_compute("fast", || "fast"), "fast");
    assert_eq!(slow.join().unwrap(), "slow");
}

fn cache_has<V: Clone>(cache: &QueryCache<V>, key: &str) -> bool {
    cache.contains(key)
}

#[test]
fn engine_single_flight_across_threads() {
    let engine = Arc::new(pets_engine());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                engine.search("dogs").stats.result_count
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
    let metrics = engine.metrics();
    assert_eq!(metrics.queries, threads as u64);
    assert_eq!(metrics.computations, 1);
    assert_eq!(metrics.cache_hits, threads as u64 - 1);
}

#[test]
fn length_three_and_one_hundred_one_bypass() {
    let engine = pets_engine();
    let three = "dog";
    let long = format!("dogs {}", "x".repeat(96));
    assert_eq!(long.chars().count(), 101);

    engine.search(three);
    engine.search(&long);

    assert!(!engine.is_cached(three));
    assert!(!engine.is_cached(&long));
    assert_eq!(engine.metrics().cached_entries, 0);
}

#[test]
fn boundary_lengths_are_cached() {
    let engine = pets_engine();
    let four = "dogs";
    let hundred = format!("dogs {}", "x".repeat(95));
    assert_eq!(hundred.chars().count(), 100);

    engine.search(four);
    engine.search(&hundred);

    assert!(engine.is_cached(four));
    assert!(engine.is_cached(&hundred));
}

#[test]
fn length_counts_chars_not_bytes() {
    let engine = pets_engine();
    // Four chars, eight bytes
    let persian = "کتاب";
    engine.search(persian);
    assert!(engine.is_cached(persian));
}

#[test]
fn bounded_capacity_evicts() {
    let config = EngineConfig {
        cache_capacity: 2,
        ..EngineConfig::default()
    };
    let engine = QueryEngine::from_documents(pets_corpus(), config).unwrap();
    engine.search("dogs");
    engine.search("cats");
    engine.search("birds");

    assert_eq!(engine.metrics().cached_entries, 2);
    assert!(!engine.is_cached("dogs"));
    assert!(engine.is_cached("birds"));
}

#[test]
fn cached_result_is_shared() {
    let engine = engine_from(pets_corpus());
    let first = engine.search("dogs");
    let second = engine.search("dogs");
    assert!(Arc::ptr_eq(&first.items, &second.items));
}
