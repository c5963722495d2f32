//! Integration tests exercising the container and sort together

use parvec::{DynVec, ParallelQuickSort, ParvecError, SortConfig, Visit};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The end-to-end scenario: populate, overwrite, sort, traverse.
#[test]
fn test_populate_set_sort_collect() {
    let mut vec = DynVec::with_capacity(4).unwrap();
    for key in [5, 3, 7, 9, 1] {
        vec.push(key).unwrap();
    }
    // Fifth push doubles 4 -> 8.
    assert_eq!(vec.capacity(), 8);
    assert_eq!(vec.len(), 5);

    let old = vec.set(0, 7).unwrap();
    assert_eq!(old, 5);
    assert_eq!(vec.as_slice(), &[7, 3, 7, 9, 1]);

    let mut sorter = ParallelQuickSort::new();
    sorter.sort(&mut vec, |a, b| a < b).unwrap();
    assert_eq!(vec.as_slice(), &[1, 3, 7, 7, 9]);
    assert_eq!(sorter.stats().items_processed, 5);

    let mut collected = Vec::new();
    vec.for_each(|&x| {
        collected.push(x);
        Ok(Visit::Continue)
    })
    .unwrap();
    assert_eq!(collected, vec![1, 3, 7, 7, 9]);
}

#[test]
fn test_sort_of_heap_owned_payloads() {
    #[derive(Debug)]
    struct Record {
        key: i64,
        label: String,
    }

    let mut vec = DynVec::new();
    for (key, label) in [(9, "nine"), (2, "two"), (7, "seven"), (4, "four")] {
        vec.push(Record {
            key,
            label: label.to_string(),
        })
        .unwrap();
    }

    parvec::algorithms::sort(&mut vec, |a, b| a.key < b.key).unwrap();

    let keys: Vec<i64> = vec.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![2, 4, 7, 9]);
    assert_eq!(vec.get(0).unwrap().label, "two");
}

#[test]
fn test_parallel_sort_large_input() {
    let mut state = 42u64;
    let mut vec = DynVec::new();
    for _ in 0..50_000 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        vec.push((state >> 33) as i64).unwrap();
    }

    let mut sorter = ParallelQuickSort::with_config(SortConfig {
        use_parallel: true,
        parallel_threshold: 512,
    });
    sorter.sort(&mut vec, |a, b| a < b).unwrap();

    assert!(sorter.stats().used_parallel);
    assert!(vec.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(vec.len(), 50_000);
}

#[test]
fn test_disposers_run_before_memory_is_released() {
    let reclaimed = Arc::new(AtomicUsize::new(0));

    let mut vec = DynVec::with_capacity(8).unwrap();
    for i in 0..6 {
        vec.push(Box::new(i)).unwrap();
    }

    let counter = reclaimed.clone();
    vec.remove_with(0, |b| {
        drop(b);
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    let counter = reclaimed.clone();
    vec.swap_remove_with(1, |b| {
        drop(b);
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    let counter = reclaimed.clone();
    vec.destroy_with(move |b| {
        drop(b);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // 6 elements total, each reclaimed exactly once.
    assert_eq!(reclaimed.load(Ordering::SeqCst), 6);
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_foreach_early_stop_and_error() {
    let mut vec = DynVec::new();
    for i in 0..10 {
        vec.push(i).unwrap();
    }

    // Early stop is a designed outcome, not an error.
    let mut visited = 0;
    vec.for_each(|&x| {
        visited += 1;
        if x == 4 {
            Ok(Visit::Stop)
        } else {
            Ok(Visit::Continue)
        }
    })
    .unwrap();
    assert_eq!(visited, 5);

    // A visitor error halts and propagates.
    let result = vec.for_each(|&x| {
        if x == 2 {
            Err(ParvecError::internal("bad element"))
        } else {
            Ok(Visit::Continue)
        }
    });
    assert_eq!(result.unwrap_err().category(), "internal");
}

#[test]
fn test_search_after_mutation() {
    let mut vec = DynVec::new();
    for x in [10, 20, 30, 20, 10] {
        vec.push(x).unwrap();
    }

    assert_eq!(vec.find_first(&20, |t, e| e == t).unwrap(), 1);
    assert_eq!(vec.find_last(&10, |t, e| e == t).unwrap(), 4);

    vec.remove(1).unwrap();
    assert_eq!(vec.find_first(&20, |t, e| e == t).unwrap(), 2);

    vec.clear();
    assert!(matches!(
        vec.find_first(&10, |t, e| e == t),
        Err(ParvecError::NotFound)
    ));
}

#[test]
fn test_growth_from_zero_capacity() {
    let mut vec = DynVec::with_capacity(0).unwrap();
    assert_eq!(vec.capacity(), 0);

    for i in 0..100 {
        vec.push(i).unwrap();
    }
    // 0 -> 1 -> 2 -> 4 -> ... -> 128
    assert_eq!(vec.capacity(), 128);
    assert_eq!(vec.len(), 100);

    parvec::algorithms::sort(&mut vec, |a, b| b < a).unwrap();
    assert_eq!(vec[0], 99);
    assert_eq!(vec[99], 0);
}
