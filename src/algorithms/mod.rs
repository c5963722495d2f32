//! Sorting algorithms operating on [`DynVec`](crate::DynVec)
//!
//! The centerpiece is [`ParallelQuickSort`], an in-place randomized quicksort
//! whose recursive partitions fan out onto worker threads once a partition
//! crosses a configurable size threshold.

pub mod parallel_quicksort;

pub use parallel_quicksort::{sort, ParallelQuickSort};

/// Configuration for the parallel quicksort
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Use parallel fork-join recursion for large partitions
    pub use_parallel: bool,
    /// Partition length above which the two recursive calls are dispatched
    /// as concurrent tasks; smaller partitions recurse sequentially to bound
    /// task-creation overhead
    pub parallel_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            use_parallel: true,
            parallel_threshold: 1_000,
        }
    }
}

/// Performance statistics for the last sort execution
#[derive(Debug, Clone, Default)]
pub struct SortStats {
    /// Total items sorted
    pub items_processed: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
    /// Whether the fork-join parallel path was taken: set exactly when the
    /// full span exceeded the threshold with `use_parallel` enabled, which is
    /// the same condition under which the first recursion dispatches its two
    /// children as concurrent tasks
    pub used_parallel: bool,
}

impl SortStats {
    /// Calculate processing rate in items per second
    pub fn items_per_second(&self) -> f64 {
        if self.processing_time_us == 0 {
            return 0.0;
        }
        (self.items_processed as f64) / (self.processing_time_us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_config_default() {
        let config = SortConfig::default();
        assert!(config.use_parallel);
        assert_eq!(config.parallel_threshold, 1_000);
    }

    #[test]
    fn test_sort_stats() {
        let stats = SortStats {
            items_processed: 1000,
            processing_time_us: 1000,
            used_parallel: false,
        };
        assert_eq!(stats.items_per_second(), 1_000_000.0);
    }

    #[test]
    fn test_sort_stats_zero_time() {
        let stats = SortStats {
            items_processed: 1000,
            processing_time_us: 0,
            used_parallel: true,
        };
        assert_eq!(stats.items_per_second(), 0.0);
    }
}
