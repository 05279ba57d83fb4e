//! Tests for the keyed cluster cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::cache::ClusterCache;

#[test]
fn test_get_or_build_stores_once() {
    let cache = ClusterCache::new();
    let calls = AtomicUsize::new(0);

    let first = cache.get_or_build("chains", 0, || {
        calls.fetch_add(1, Ordering::Relaxed);
        Some(vec![1u64, 2, 3])
    });
    let second = cache.get_or_build("chains", 0, || {
        calls.fetch_add(1, Ordering::Relaxed);
        Some(vec![9u64])
    });

    assert_eq!(calls.load(Ordering::Relaxed), 1);
    let first = first.unwrap();
    let second = second.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*second, vec![1, 2, 3]);
    assert_eq!(cache.build_count(), 1);
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn test_failed_build_stores_nothing() {
    let cache = ClusterCache::new();
    let result = cache.get_or_build::<u32, _>("chains", 0, || None);
    assert!(result.is_none());
    assert!(!cache.contains("chains"));
    assert!(cache.is_empty());
}

#[test]
fn test_context_hash_mismatch_misses() {
    let cache = ClusterCache::new();
    cache.get_or_build("chains", 0, || Some(5u32));

    assert_eq!(cache.get::<u32>("chains", 0).as_deref(), Some(&5));
    assert!(cache.get::<u32>("chains", 1).is_none());
}

#[test]
fn test_type_mismatch_misses() {
    let cache = ClusterCache::new();
    cache.get_or_build("chains", 0, || Some(5u32));
    assert!(cache.get::<String>("chains", 0).is_none());
}

#[test]
fn test_invalidate_and_clear() {
    let cache = ClusterCache::new();
    cache.get_or_build("a", 0, || Some(1u8));
    cache.get_or_build("b", 0, || Some(2u8));
    assert_eq!(cache.len(), 2);

    assert!(cache.invalidate("a"));
    assert!(!cache.invalidate("a"));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_concurrent_first_builds_share_one_value() {
    let cache = ClusterCache::new();
    let calls = AtomicUsize::new(0);

    let values: Vec<Arc<u64>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let cache = &cache;
                let calls = &calls;
                scope.spawn(move || {
                    cache
                        .get_or_build("chains", 0, || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(std::time::Duration::from_millis(5));
                            Some(100 + i)
                        })
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let stored = cache.get::<u64>("chains", 0).unwrap();
    assert!(values.iter().all(|v| Arc::ptr_eq(v, &stored)));
    assert!(calls.load(Ordering::SeqCst) >= 1);
    assert_eq!(cache.build_count(), 1);
}

#[test]
fn test_builder_may_reenter_cache() {
    let cache = ClusterCache::new();

    let outer = cache.get_or_build("chains", 0, || {
        let other = cache.get_or_build("stats", 0, || Some(7u32));
        assert_eq!(other.as_deref(), Some(&7));
        // Same slot from inside its own builder: stored first, so it wins.
        let inner = cache.get_or_build("chains", 0, || Some(1u32));
        assert_eq!(inner.as_deref(), Some(&1));
        Some(2u32)
    });

    assert_eq!(outer.as_deref(), Some(&1));
    assert_eq!(cache.get::<u32>("chains", 0).as_deref(), Some(&1));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.build_count(), 2);
}

#[test]
fn test_debug_lists_keys() {
    let cache = ClusterCache::new();
    cache.get_or_build("zeta", 0, || Some(1u8));
    cache.get_or_build("alpha", 0, || Some(1u8));
    let debug = format!("{cache:?}");
    assert!(debug.contains("alpha"));
    assert!(debug.contains("zeta"));
}
