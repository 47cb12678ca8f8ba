//! Matrix type for 2D numeric data.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::mem;
use std::ops::{Index, IndexMut, Neg};
use std::path::Path;
use std::slice;

use super::Element;
use crate::error::{LinealError, Result};

/// Backing storage for a matrix buffer.
///
/// Only the `Owned` arm ever releases memory; a `Borrowed` buffer belongs to
/// the caller and outlives the matrix by construction.
#[derive(Debug)]
enum Storage<'buf, T> {
    Owned(Vec<T>),
    Borrowed(&'buf mut [T]),
}

/// A 2D matrix of numeric values (row-major storage).
///
/// The shape is fixed at construction: a `rows x cols` matrix holds exactly
/// `rows * cols` elements at linear offset `row * cols + col` for its whole
/// lifetime. The buffer is either owned by the matrix or borrowed from the
/// caller (see [`Matrix::from_buffer`]); every operation behaves identically
/// over both modes.
///
/// # Examples
///
/// ```
/// use lineal::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug)]
pub struct Matrix<'buf, T> {
    rows: usize,
    cols: usize,
    storage: Storage<'buf, T>,
}

/// Read-only view over one matrix row.
///
/// Borrowed from the parent matrix; indexing performs no bounds check beyond
/// the slice's own.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a, T> {
    elements: &'a [T],
}

/// Mutable view over one matrix row.
#[derive(Debug)]
pub struct RowViewMut<'a, T> {
    elements: &'a mut [T],
}

impl<T> RowView<'_, T> {
    /// Number of elements in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True for a row of a matrix with zero columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The row as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.elements
    }
}

impl<T> Index<usize> for RowView<'_, T> {
    type Output = T;

    fn index(&self, n: usize) -> &T {
        &self.elements[n]
    }
}

impl<T> RowViewMut<'_, T> {
    /// Number of elements in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True for a row of a matrix with zero columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> Index<usize> for RowViewMut<'_, T> {
    type Output = T;

    fn index(&self, n: usize) -> &T {
        &self.elements[n]
    }
}

impl<T> IndexMut<usize> for RowViewMut<'_, T> {
    fn index_mut(&mut self, n: usize) -> &mut T {
        &mut self.elements[n]
    }
}

impl<T> Matrix<'_, T> {
    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True for a matrix with zero rows or zero columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns the underlying buffer as a row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data,
        }
    }

    /// Returns the underlying buffer as a mutable row-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data,
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LinealError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Returns a view over row `n` with no bounds check of its own.
    ///
    /// Caller contract: `n < self.n_rows()`. Violations panic on the slice
    /// operation rather than returning an error; use [`Matrix::get`] for
    /// checked access.
    #[must_use]
    pub fn row(&self, n: usize) -> RowView<'_, T> {
        let start = n * self.cols;
        RowView {
            elements: &self.as_slice()[start..start + self.cols],
        }
    }

    /// Returns a mutable view over row `n` with no bounds check of its own.
    ///
    /// Caller contract: `n < self.n_rows()`.
    pub fn row_mut(&mut self, n: usize) -> RowViewMut<'_, T> {
        let start = n * self.cols;
        let cols = self.cols;
        RowViewMut {
            elements: &mut self.as_mut_slice()[start..start + cols],
        }
    }
}

impl<T: Element> Matrix<'_, T> {
    fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols)
            .ok_or(LinealError::InvalidShape { rows, cols })
    }

    /// Creates a matrix with every element set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::AllocationFailure`] if the buffer cannot be
    /// allocated, and [`LinealError::InvalidShape`] if `rows * cols` is not
    /// representable.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Result<Matrix<'static, T>> {
        let len = Self::checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| LinealError::AllocationFailure { elements: len })?;
        data.resize(len, fill);
        Ok(Matrix {
            rows,
            cols,
            storage: Storage::Owned(data),
        })
    }

    /// Creates a matrix of zeros, the default fill.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Matrix::filled`].
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix<'static, T>> {
        Self::filled(rows, cols, T::zero())
    }

    /// Creates a matrix from a vector of row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::ShapeMismatch`] if data length doesn't match
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Matrix<'static, T>> {
        let len = Self::checked_len(rows, cols)?;
        if data.len() != len {
            return Err(LinealError::ShapeMismatch {
                expected: format!("{rows}x{cols} ({len} elements)"),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Matrix {
            rows,
            cols,
            storage: Storage::Owned(data),
        })
    }

    /// Creates a matrix over a caller-owned buffer, filling the used prefix
    /// with `fill`.
    ///
    /// The matrix borrows `buf` for its whole lifetime and never frees it.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::InsufficientCapacity`] if `buf` holds fewer than
    /// `rows * cols` elements.
    pub fn from_buffer<'buf>(
        rows: usize,
        cols: usize,
        buf: &'buf mut [T],
        fill: T,
    ) -> Result<Matrix<'buf, T>> {
        let len = Self::checked_len(rows, cols)?;
        if buf.len() < len {
            return Err(LinealError::InsufficientCapacity {
                required: len * mem::size_of::<T>(),
                capacity: buf.len() * mem::size_of::<T>(),
            });
        }
        let used = &mut buf[..len];
        used.fill(fill);
        Ok(Matrix {
            rows,
            cols,
            storage: Storage::Borrowed(used),
        })
    }

    /// Creates a matrix over a raw caller-owned buffer of `capacity_bytes`
    /// bytes, filling the used prefix with `fill`.
    ///
    /// This is the interoperability entry point for externally managed memory;
    /// prefer [`Matrix::from_buffer`] when a slice is available.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::InvalidExternalBuffer`] if `ptr` is null and
    /// [`LinealError::InsufficientCapacity`] if `capacity_bytes` is smaller
    /// than `rows * cols * size_of::<T>()`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `capacity_bytes` bytes of properly aligned,
    /// initialized `T` storage that outlives the returned matrix and is not
    /// aliased while the matrix exists.
    pub unsafe fn from_raw_buffer<'buf>(
        rows: usize,
        cols: usize,
        ptr: *mut T,
        capacity_bytes: usize,
        fill: T,
    ) -> Result<Matrix<'buf, T>> {
        if ptr.is_null() {
            return Err(LinealError::InvalidExternalBuffer);
        }
        let len = Self::checked_len(rows, cols)?;
        let required = len * mem::size_of::<T>();
        if capacity_bytes < required {
            return Err(LinealError::InsufficientCapacity {
                required,
                capacity: capacity_bytes,
            });
        }
        let buf = slice::from_raw_parts_mut(ptr, len);
        buf.fill(fill);
        Ok(Matrix {
            rows,
            cols,
            storage: Storage::Borrowed(buf),
        })
    }

    /// Creates an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::NotSquare`] if `rows != cols`.
    pub fn identity(rows: usize, cols: usize) -> Result<Matrix<'static, T>> {
        if rows != cols {
            return Err(LinealError::NotSquare { rows, cols });
        }
        let mut eye = Self::zeros(rows, cols)?;
        for i in 0..rows {
            eye.as_mut_slice()[i * cols + i] = T::one();
        }
        Ok(eye)
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.check_bounds(row, col)?;
        Ok(self.as_slice()[idx])
    }

    /// Gets a mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.check_bounds(row, col)?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.check_bounds(row, col)?;
        self.as_mut_slice()[idx] = value;
        Ok(())
    }

    /// Transposes a square matrix in place.
    ///
    /// Leaves the matrix untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::NotSquare`] for non-square shapes.
    pub fn transpose_in_place(&mut self) -> Result<&mut Self> {
        if self.rows != self.cols {
            return Err(LinealError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let data = self.as_mut_slice();
        for y in 0..n {
            for x in y + 1..n {
                data.swap(y * n + x, x * n + y);
            }
        }
        Ok(self)
    }

    /// Writes the transpose of `self` into `dest`.
    ///
    /// Works for any rectangular shape. Returns `false` without touching
    /// `dest` unless `dest.shape() == (self.n_cols(), self.n_rows())`.
    pub fn transpose_into(&self, dest: &mut Matrix<'_, T>) -> bool {
        if dest.rows != self.cols || dest.cols != self.rows {
            return false;
        }
        let src = self.as_slice();
        let dst = dest.as_mut_slice();
        for y in 0..self.rows {
            for x in 0..self.cols {
                dst[x * self.rows + y] = src[y * self.cols + x];
            }
        }
        true
    }

    /// Deep-copies into a matrix that owns its buffer.
    #[must_use]
    pub fn clone_owned(&self) -> Matrix<'static, T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            storage: Storage::Owned(self.as_slice().to_vec()),
        }
    }

    /// Writes the text dump into any byte sink.
    ///
    /// One line per row, each element right-justified under the element
    /// type's column policy and followed by a single space.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the sink.
    pub fn write_into<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        let data = self.as_slice();
        for y in 0..self.rows {
            for x in 0..self.cols {
                write!(sink, "{} ", data[y * self.cols + x].padded())?;
            }
            writeln!(sink)?;
        }
        Ok(())
    }

    /// Writes the text dump to a named file, truncating existing content.
    ///
    /// Returns `false` if the file cannot be created or written.
    pub fn dump_to_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let Ok(file) = File::create(path) else {
            return false;
        };
        let mut writer = BufWriter::new(file);
        self.write_into(&mut writer).is_ok() && writer.flush().is_ok()
    }
}

impl<T: Element + Neg<Output = T>> Matrix<'_, T> {
    /// Negates every element in place; returns `&mut self` for chaining.
    pub fn negate(&mut self) -> &mut Self {
        for e in self.as_mut_slice() {
            *e = -*e;
        }
        self
    }
}

impl<T: Element> Clone for Matrix<'_, T> {
    /// Deep copy; the clone always owns its buffer, independent of the
    /// original's storage mode.
    fn clone(&self) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            storage: Storage::Owned(self.as_slice().to_vec()),
        }
    }
}

impl<'a, 'b, T: PartialEq> PartialEq<Matrix<'b, T>> for Matrix<'a, T> {
    /// Identical shape and elementwise equality; short-circuits on the first
    /// mismatch. Storage mode does not participate.
    fn eq(&self, other: &Matrix<'b, T>) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.as_slice() == other.as_slice()
    }
}

impl<T: Element> fmt::Display for Matrix<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.as_slice();
        for y in 0..self.rows {
            for x in 0..self.cols {
                write!(f, "{} ", data[y * self.cols + x].padded())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
