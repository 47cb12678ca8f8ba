//! Error types for Lineal operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Lineal operations.
///
/// Shape-compatibility failures on the elementwise and multiplicative
/// operations are reported through `bool` results instead; this type covers
/// the structural failures that must reach the caller as real errors.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::NotSquare { rows: 2, cols: 3 };
/// assert!(err.to_string().contains("2x3"));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum LinealError {
    /// Operand or destination shapes are incompatible for the operation.
    ShapeMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Operation requires a square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Bounds-checked element access out of range.
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// Externally supplied buffer pointer is null.
    InvalidExternalBuffer,

    /// Externally supplied buffer is too small for the requested shape.
    InsufficientCapacity {
        /// Capacity required by the shape
        required: usize,
        /// Capacity actually supplied
        capacity: usize,
    },

    /// Owned-buffer construction could not obtain memory.
    AllocationFailure {
        /// Number of elements requested
        elements: usize,
    },

    /// An arithmetic step would exceed the element type's representable range.
    ArithmeticOverflow {
        /// Destination row of the failing cell
        row: usize,
        /// Destination column of the failing cell
        col: usize,
    },

    /// Degenerate shape (zero-sized or otherwise unusable) for the operation.
    InvalidShape {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinealError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            LinealError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}x{cols}")
            }
            LinealError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
            LinealError::InvalidExternalBuffer => {
                write!(f, "external buffer pointer is null")
            }
            LinealError::InsufficientCapacity { required, capacity } => {
                write!(
                    f,
                    "external buffer too small: need {required} bytes, have {capacity}"
                )
            }
            LinealError::AllocationFailure { elements } => {
                write!(f, "failed to allocate buffer for {elements} elements")
            }
            LinealError::ArithmeticOverflow { row, col } => {
                write!(f, "arithmetic overflow computing element ({row}, {col})")
            }
            LinealError::InvalidShape { rows, cols } => {
                write!(f, "invalid shape {rows}x{cols} for this operation")
            }
        }
    }
}

impl std::error::Error for LinealError {}

impl LinealError {
    /// Create a shape mismatch error from two (rows, cols) pairs.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = LinealError::shape_mismatch((2, 3), (3, 2));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("3x2"));
    }

    #[test]
    fn test_not_square_display() {
        let err = LinealError::NotSquare { rows: 4, cols: 5 };
        let msg = err.to_string();
        assert!(msg.contains("square"));
        assert!(msg.contains("4x5"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = LinealError::IndexOutOfRange {
            row: 3,
            col: 0,
            rows: 2,
            cols: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("(3, 0)"));
        assert!(msg.contains("2x2"));
    }

    #[test]
    fn test_insufficient_capacity_display() {
        let err = LinealError::InsufficientCapacity {
            required: 48,
            capacity: 32,
        };
        let msg = err.to_string();
        assert!(msg.contains("48"));
        assert!(msg.contains("32"));
    }

    #[test]
    fn test_allocation_failure_display() {
        let err = LinealError::AllocationFailure { elements: 1024 };
        assert!(err.to_string().contains("1024"));
    }

    #[test]
    fn test_arithmetic_overflow_display() {
        let err = LinealError::ArithmeticOverflow { row: 1, col: 2 };
        assert!(err.to_string().contains("(1, 2)"));
    }

    #[test]
    fn test_invalid_shape_display() {
        let err = LinealError::InvalidShape { rows: 0, cols: 0 };
        assert!(err.to_string().contains("0x0"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&LinealError::InvalidExternalBuffer);
    }
}
