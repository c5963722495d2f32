//! In-place randomized quicksort with fork-join parallel recursion
//!
//! The recursive step picks a random pivot, partitions with the Lomuto
//! scheme, then recurses on the two sides. Partitions larger than
//! [`SortConfig::parallel_threshold`] dispatch their two recursions as
//! concurrent rayon tasks over provably disjoint sub-slices; the join point
//! blocks until both complete, so recursion depth stays O(log n) expected
//! and the borrow of the backing buffer never outlives the call.
//!
//! Pivot selection uses a call-local linear-congruential generator seeded
//! from a time source, the sub-range, and the worker's identity, so
//! concurrent sibling calls never share random state. The randomness only
//! shapes the recursion tree; the sorted output is the same on every run.

use crate::algorithms::{SortConfig, SortStats};
use crate::containers::DynVec;
use crate::error::{ParvecError, Result};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Fast call-local pseudo-random source for pivot selection.
///
/// Non-cryptographic by design; correctness of the sort does not depend on
/// the quality of this generator.
struct Lcg(u32);

impl Lcg {
    fn seeded(span: usize, salt: usize) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        let worker = rayon::current_thread_index().unwrap_or(0) as u32;
        Lcg(
            (nanos ^ worker.wrapping_mul(5678) ^ (span as u32) ^ (salt as u32))
                & 0x7fff_ffff,
        )
    }

    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345) & 0x7fff_ffff;
        self.0
    }
}

/// In-place randomized quicksort with parallel fork-join recursion
///
/// Sorts a [`DynVec`] (or any mutable slice) under a caller-supplied
/// strict-less-than predicate. The sort is not stable: elements that compare
/// equal keep no particular relative order. Passing a predicate that is not
/// a strict weak ordering yields an unspecified but memory-safe ordering.
///
/// # Examples
///
/// ```rust
/// use parvec::{DynVec, ParallelQuickSort};
///
/// let mut vec = DynVec::new();
/// for x in [5, 3, 7, 9, 1] {
///     vec.push(x).unwrap();
/// }
///
/// let mut sorter = ParallelQuickSort::new();
/// sorter.sort(&mut vec, |a, b| a < b).unwrap();
/// assert_eq!(vec.as_slice(), &[1, 3, 5, 7, 9]);
/// ```
pub struct ParallelQuickSort {
    config: SortConfig,
    stats: SortStats,
}

impl ParallelQuickSort {
    /// Create a sorter with the default configuration
    pub fn new() -> Self {
        Self::with_config(SortConfig::default())
    }

    /// Create a sorter with a custom configuration
    pub fn with_config(config: SortConfig) -> Self {
        Self {
            config,
            stats: SortStats::default(),
        }
    }

    /// Sort the container in place under `less`
    ///
    /// An empty or single-element container is a trivial success. The
    /// container's buffer is borrowed mutably for the duration of the call;
    /// concurrent branches only ever receive disjoint sub-ranges of it.
    pub fn sort<T, F>(&mut self, vec: &mut DynVec<T>, less: F) -> Result<()>
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        self.sort_slice(vec.as_mut_slice(), less)
    }

    /// Sort a mutable slice in place under `less`
    pub fn sort_slice<T, F>(&mut self, data: &mut [T], less: F) -> Result<()>
    where
        T: Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        let start_time = Instant::now();
        let len = data.len();
        // Same predicate the recursive step applies to the full slice, so
        // this is true exactly when the first recursion fans out.
        let used_parallel =
            self.config.use_parallel && len.saturating_sub(1) > self.config.parallel_threshold;

        log::debug!("sorting {} elements (parallel: {})", len, used_parallel);

        if len > 1 {
            quicksort(data, &less, &self.config)?;
        }

        self.stats = SortStats {
            items_processed: len,
            processing_time_us: start_time.elapsed().as_micros() as u64,
            used_parallel,
        };
        Ok(())
    }

    /// Get performance statistics from the last execution
    pub fn stats(&self) -> &SortStats {
        &self.stats
    }
}

impl Default for ParallelQuickSort {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort a container with the default configuration
pub fn sort<T, F>(vec: &mut DynVec<T>, less: F) -> Result<()>
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    ParallelQuickSort::new().sort(vec, less)
}

fn quicksort<T, F>(data: &mut [T], less: &F, config: &SortConfig) -> Result<()>
where
    T: Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    let len = data.len();
    if len <= 1 {
        return Ok(());
    }

    let pivot = partition(data, less)?;
    let (left, rest) = data.split_at_mut(pivot);
    let right = &mut rest[1..];

    if config.use_parallel && len - 1 > config.parallel_threshold {
        // Disjoint sub-slices, so the branches never touch the same slot.
        // Join returns both results by value; when both branches fail, the
        // left one deterministically wins.
        let (left_result, right_result) = rayon::join(
            || quicksort(left, less, config),
            || quicksort(right, less, config),
        );
        left_result.and(right_result)
    } else {
        quicksort(left, less, config)?;
        quicksort(right, less, config)
    }
}

/// Lomuto partition over the whole sub-slice, pivot drawn at random.
///
/// Returns the pivot's final index within `data`.
fn partition<T, F>(data: &mut [T], less: &F) -> Result<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return Err(ParvecError::internal(format!(
            "partition over degenerate range of length {}",
            len
        )));
    }

    let high = len - 1;
    let mut rng = Lcg::seeded(len, data.as_ptr() as usize);
    let pivot_index = (rng.next() as usize) % len;
    data.swap(pivot_index, high);

    let mut boundary = 0;
    for j in 0..high {
        if less(&data[j], &data[high]) {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    Ok(boundary)
}
