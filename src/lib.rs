//! # Parvec: Resizable Container with Parallel Quicksort
//!
//! This crate provides a generic, resizable, index-addressed container with
//! explicit error reporting and an in-place, randomized, fork-join parallel
//! quicksort layered on top of it.
//!
//! ## Key Features
//!
//! - **`DynVec<T>`**: realloc-backed vector with amortized-O(1) append,
//!   O(1) indexed access, ordered and O(1) unordered removal, linear search,
//!   traversal with early exit, and optional caller-supplied disposers for
//!   element cleanup
//! - **`ParallelQuickSort`**: comparison-based in-place sort whose recursive
//!   partitions run as concurrent rayon tasks once a partition-size threshold
//!   is crossed, with call-local pivot randomness and deterministic output
//! - **Explicit errors**: every fallible operation returns a discriminated
//!   [`Result`] instead of panicking; growth failure leaves the container in
//!   its prior valid state
//!
//! ## Quick Start
//!
//! ```rust
//! use parvec::{DynVec, ParallelQuickSort, Visit};
//!
//! # fn main() -> parvec::Result<()> {
//! let mut vec = DynVec::with_capacity(4)?;
//! for key in [5, 3, 7, 9, 1] {
//!     vec.push(key)?;
//! }
//!
//! // Overwrite slot 0, taking back the displaced element.
//! let old = vec.set(0, 7)?;
//! assert_eq!(old, 5);
//!
//! // Sort ascending, in place, possibly on multiple threads.
//! let mut sorter = ParallelQuickSort::new();
//! sorter.sort(&mut vec, |a, b| a < b)?;
//! assert_eq!(vec.as_slice(), &[1, 3, 7, 7, 9]);
//!
//! // Traverse with a tri-state visitor.
//! let mut collected = Vec::new();
//! vec.for_each(|&x| {
//!     collected.push(x);
//!     Ok(Visit::Continue)
//! })?;
//! assert_eq!(collected, vec![1, 3, 7, 7, 9]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency Model
//!
//! Only the sort is concurrent. Container operations are single-threaded and
//! need external synchronization when shared; the container provides no
//! internal locking. The sort borrows the buffer mutably for the duration of
//! the call and hands concurrent branches provably disjoint sub-ranges, so
//! the buffer itself needs no synchronization.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod containers;
pub mod error;

// Re-export core types
pub use algorithms::{ParallelQuickSort, SortConfig, SortStats};
pub use containers::{DynVec, Visit};
pub use error::{ParvecError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing parvec v{}", VERSION);
}
