//! Linear-algebra operations over [`Matrix`] values.
//!
//! Free functions that read their operands through shared references and
//! write into a caller-supplied destination; none of them allocates the
//! result it returns. Shape incompatibility is reported through the `bool`
//! result; the overflow-checked multiply and the determinant propagate
//! structured errors instead.

use crate::error::{LinealError, Result};
use crate::primitives::{Element, Matrix};

/// Pivots with magnitude below this are treated as zero, making the matrix
/// singular.
const SINGULAR_TOLERANCE: f64 = 1e-4;

/// Elementwise sum: `dst[y][x] = m[y][x] + n[y][x]`.
///
/// Returns `false` without touching `dst` unless `m`, `n`, and `dst` all
/// share one shape.
///
/// # Examples
///
/// ```
/// use lineal::prelude::*;
///
/// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
/// let mut dst = Matrix::zeros(2, 2).unwrap();
/// assert!(add(&a, &b, &mut dst));
/// assert_eq!(dst.get(1, 0).unwrap(), 10);
/// ```
pub fn add<T: Element>(m: &Matrix<'_, T>, n: &Matrix<'_, T>, dst: &mut Matrix<'_, T>) -> bool {
    if m.shape() != n.shape() || m.shape() != dst.shape() {
        return false;
    }
    for ((d, &a), &b) in dst
        .as_mut_slice()
        .iter_mut()
        .zip(m.as_slice())
        .zip(n.as_slice())
    {
        *d = a + b;
    }
    true
}

/// Elementwise sum clamped to the element type's maximum.
///
/// Overflow-aware variant of [`add`]: a sum that would exceed the
/// representable range saturates instead of wrapping. Returns `false` only
/// on shape mismatch; once shapes match it always succeeds.
pub fn saturating_add<T: Element>(
    m: &Matrix<'_, T>,
    n: &Matrix<'_, T>,
    dst: &mut Matrix<'_, T>,
) -> bool {
    if m.shape() != n.shape() || m.shape() != dst.shape() {
        return false;
    }
    for ((d, &a), &b) in dst
        .as_mut_slice()
        .iter_mut()
        .zip(m.as_slice())
        .zip(n.as_slice())
    {
        *d = a.saturating_add(b);
    }
    true
}

/// Matrix product: `dst[i][j] = sum_k m[i][k] * n[k][j]`.
///
/// Requires `m.n_cols() == n.n_rows()` and `dst` shaped
/// `m.n_rows() x n.n_cols()`; returns `false` without touching `dst`
/// otherwise. Every destination cell is assigned from a fresh accumulator,
/// so stale contents of `dst` never leak into the product.
pub fn multiply<T: Element>(m: &Matrix<'_, T>, n: &Matrix<'_, T>, dst: &mut Matrix<'_, T>) -> bool {
    if m.n_cols() != n.n_rows() {
        return false;
    }
    if dst.n_rows() != m.n_rows() || dst.n_cols() != n.n_cols() {
        return false;
    }

    let (a, b) = (m.as_slice(), n.as_slice());
    let (inner, out_cols) = (m.n_cols(), n.n_cols());
    let out = dst.as_mut_slice();
    for i in 0..m.n_rows() {
        for j in 0..out_cols {
            let mut sum = T::zero();
            for k in 0..inner {
                sum = sum + a[i * inner + k] * b[k * out_cols + j];
            }
            out[i * out_cols + j] = sum;
        }
    }
    true
}

/// Overflow-checked matrix product.
///
/// Validates every pairwise product and every accumulation step; the first
/// step that would exceed the element type's representable range aborts the
/// whole operation. The product is computed into a private scratch buffer
/// and committed to `dst` only on full success, so `dst` is untouched on
/// every failure path.
///
/// # Errors
///
/// [`LinealError::ShapeMismatch`] on incompatible shapes,
/// [`LinealError::ArithmeticOverflow`] naming the destination cell whose
/// computation overflowed.
pub fn try_multiply<T: Element>(
    m: &Matrix<'_, T>,
    n: &Matrix<'_, T>,
    dst: &mut Matrix<'_, T>,
) -> Result<()> {
    if m.n_cols() != n.n_rows() {
        return Err(LinealError::shape_mismatch(
            (m.n_cols(), n.n_cols()),
            n.shape(),
        ));
    }
    if dst.n_rows() != m.n_rows() || dst.n_cols() != n.n_cols() {
        return Err(LinealError::shape_mismatch(
            (m.n_rows(), n.n_cols()),
            dst.shape(),
        ));
    }

    let (a, b) = (m.as_slice(), n.as_slice());
    let (inner, out_cols) = (m.n_cols(), n.n_cols());
    let mut scratch = vec![T::zero(); m.n_rows() * out_cols];
    for i in 0..m.n_rows() {
        for j in 0..out_cols {
            let mut sum = T::zero();
            for k in 0..inner {
                let product = a[i * inner + k]
                    .checked_mul(b[k * out_cols + j])
                    .ok_or(LinealError::ArithmeticOverflow { row: i, col: j })?;
                sum = sum
                    .checked_add(product)
                    .ok_or(LinealError::ArithmeticOverflow { row: i, col: j })?;
            }
            scratch[i * out_cols + j] = sum;
        }
    }
    dst.as_mut_slice().copy_from_slice(&scratch);
    Ok(())
}

/// Determinant via Gaussian elimination with partial pivoting.
///
/// Works on a private `f64` copy of the input; the caller's matrix is never
/// mutated. Accumulation is done in double precision regardless of the
/// element type to bound error growth. A pivot with magnitude below the
/// singularity tolerance short-circuits to `0.0`.
///
/// # Errors
///
/// [`LinealError::InvalidShape`] for a matrix with zero rows or columns,
/// [`LinealError::NotSquare`] for rectangular input.
///
/// # Examples
///
/// ```
/// use lineal::prelude::*;
///
/// let m = Matrix::from_vec(2, 2, vec![2.0, 0.0, 0.0, 3.0]).unwrap();
/// assert!((determinant(&m).unwrap() - 6.0).abs() < 1e-9);
/// ```
pub fn determinant<T: Element>(m: &Matrix<'_, T>) -> Result<f64> {
    let (rows, cols) = m.shape();
    if rows == 0 || cols == 0 {
        return Err(LinealError::InvalidShape { rows, cols });
    }
    if rows != cols {
        return Err(LinealError::NotSquare { rows, cols });
    }

    let mut work: Vec<f64> = m.as_slice().iter().map(|&v| v.to_f64()).collect();
    Ok(eliminate(&mut work, rows))
}

/// Destructive elimination over a flat row-major `n x n` buffer.
fn eliminate(a: &mut [f64], n: usize) -> f64 {
    let mut det = 1.0;
    for i in 0..n - 1 {
        let mut pivot_row = i;
        for r in i + 1..n {
            if a[r * n + i].abs() > a[pivot_row * n + i].abs() {
                pivot_row = r;
            }
        }
        if pivot_row != i {
            for c in 0..n {
                a.swap(i * n + c, pivot_row * n + c);
            }
            det = -det;
        }

        let pivot = a[i * n + i];
        if pivot.abs() < SINGULAR_TOLERANCE {
            return 0.0;
        }

        for r in i + 1..n {
            let factor = a[r * n + i] / pivot;
            for c in i..n {
                a[r * n + c] -= factor * a[i * n + c];
            }
        }
        det *= pivot;
    }
    det * a[(n - 1) * n + (n - 1)]
}

#[cfg(test)]
#[path = "linalg_tests.rs"]
mod tests;
