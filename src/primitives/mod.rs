//! Core container primitives (Matrix, row views, element trait).

mod element;
mod matrix;

pub use element::Element;
pub use matrix::{Matrix, RowView, RowViewMut};

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
