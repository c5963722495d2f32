//! Error handling for the parvec library
//!
//! This module provides detailed error information for all container and
//! sort operations. Every fallible operation reports its own error locally;
//! nothing retries automatically.

use thiserror::Error;

/// Main error type for the parvec library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParvecError {
    /// Requested capacity exceeds the maximum representable slot count
    #[error("Invalid capacity: requested {requested} slots, maximum is {max}")]
    InvalidCapacity {
        /// The capacity that was requested
        requested: usize,
        /// The maximum slot count for the element type
        max: usize,
    },

    /// The backing store could not be obtained or grown
    #[error("Memory allocation failed: requested {size} bytes")]
    AllocationFailure {
        /// Number of bytes requested
        size: usize,
    },

    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// A linear search matched no element
    #[error("No element matched the search predicate")]
    NotFound,

    /// An internal invariant was violated
    #[error("Internal failure: {message}")]
    InternalFailure {
        /// Description of the violated invariant
        message: String,
    },
}

impl ParvecError {
    /// Create an invalid capacity error
    pub fn invalid_capacity(requested: usize, max: usize) -> Self {
        Self::InvalidCapacity { requested, max }
    }

    /// Create an allocation failure error
    pub fn allocation_failure(size: usize) -> Self {
        Self::AllocationFailure { size }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a not found error
    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Create an internal failure error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::InternalFailure {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::AllocationFailure { .. } => true,
            Self::NotFound => true,
            Self::InvalidCapacity { .. } => false,
            Self::OutOfBounds { .. } => false,
            Self::InternalFailure { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCapacity { .. } => "capacity",
            Self::AllocationFailure { .. } => "memory",
            Self::OutOfBounds { .. } => "bounds",
            Self::NotFound => "search",
            Self::InternalFailure { .. } => "internal",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ParvecError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(ParvecError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ParvecError::invalid_capacity(usize::MAX, 1024);
        assert_eq!(err.category(), "capacity");
        assert!(!err.is_recoverable());

        let err = ParvecError::allocation_failure(4096);
        assert_eq!(err.category(), "memory");
        assert!(err.is_recoverable());

        let err = ParvecError::internal("partition bounds corrupt");
        assert_eq!(err.category(), "internal");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_bounds_checking() {
        assert!(check_bounds(5, 10).is_ok());
        assert!(check_bounds(10, 10).is_err());
        assert!(check_bounds(15, 10).is_err());
        assert!(check_bounds(0, 0).is_err());
        assert!(check_bounds(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ParvecError::out_of_bounds(10, 5);
        let display = format!("{}", err);
        assert!(display.contains("Out of bounds"));
        assert!(display.contains("10"));
        assert!(display.contains("5"));

        let err = ParvecError::allocation_failure(1 << 20);
        assert!(format!("{}", err).contains("Memory allocation failed"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ParvecError::not_found().category(), "search");
        assert_eq!(ParvecError::out_of_bounds(1, 0).category(), "bounds");
        assert!(!ParvecError::out_of_bounds(1, 0).is_recoverable());
        assert!(ParvecError::not_found().is_recoverable());
    }
}
