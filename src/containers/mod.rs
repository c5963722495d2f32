//! Container types
//!
//! This module provides the core container of the crate:
//!
//! - **`DynVec<T>`** - Resizable, index-addressed vector using realloc for
//!   growth, with explicit error reporting on every fallible operation and
//!   optional caller-supplied disposers for element cleanup.

mod dyn_vec;

pub use dyn_vec::{DynVec, Visit};
