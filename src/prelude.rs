//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//! ```

pub use crate::error::{LinealError, Result};
pub use crate::linalg::{add, determinant, multiply, saturating_add, try_multiply};
pub use crate::primitives::{Element, Matrix, RowView, RowViewMut};
