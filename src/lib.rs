//! Lineal: dense row-major matrix primitives in pure Rust.
//!
//! Lineal provides a generic two-dimensional container, [`Matrix`], together
//! with a small set of linear-algebra operations built on it: element access,
//! transpose, negation, identity construction, elementwise addition, matrix
//! multiplication, determinant computation, and a text dump format.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
//! let mut sum = Matrix::zeros(2, 2).unwrap();
//!
//! assert!(add(&a, &b, &mut sum));
//! assert_eq!(sum.get(1, 1).unwrap(), 12);
//!
//! let eye = Matrix::<f64>::identity(2, 2).unwrap();
//! assert!((determinant(&eye).unwrap() - 1.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] container, row views, and the [`Element`]
//!   trait that keys numeric and formatting behavior per element type
//! - [`linalg`]: free functions over matrices (`add`, `multiply`, `determinant`)
//! - [`error`]: the crate-wide error type
//!
//! [`Matrix`]: primitives::Matrix
//! [`Element`]: primitives::Element

pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;

pub use error::{LinealError, Result};
pub use primitives::{Element, Matrix, RowView, RowViewMut};
