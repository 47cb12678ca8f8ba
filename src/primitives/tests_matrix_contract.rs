// =========================================================================
// Matrix container contract
//
// Algebraic properties the container must never violate, checked on fixed
// cases and on randomized shapes/contents.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;
use crate::linalg::multiply;

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");
    let mut att = a.clone();
    att.transpose_in_place().expect("square");
    att.transpose_in_place().expect("square");
    assert_eq!(att, a, "double transpose must restore the matrix");
}

/// Out-of-place transpose swaps shape: (m x n) -> (n x m)
#[test]
fn contract_transpose_into_swaps_shape() {
    let a = Matrix::<f32>::zeros(3, 5).expect("valid");
    let mut t = Matrix::<f32>::zeros(5, 3).expect("valid");
    assert!(a.transpose_into(&mut t));
    assert_eq!(t.shape(), (5, 3));
}

/// Identity has ones on the diagonal, zeros elsewhere
#[test]
fn contract_identity_layout() {
    for n in 1..=6 {
        let eye = Matrix::<i32>::identity(n, n).expect("square");
        for i in 0..n {
            for j in 0..n {
                let expected = i32::from(i == j);
                assert_eq!(eye.get(i, j).unwrap(), expected);
            }
        }
    }
}

/// Identity is a two-sided multiplicative identity
#[test]
fn contract_identity_multiplication() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");
    let eye = Matrix::<f64>::identity(3, 3).expect("square");

    let mut left = Matrix::zeros(3, 3).expect("valid");
    let mut right = Matrix::zeros(3, 3).expect("valid");
    assert!(multiply(&eye, &a, &mut left));
    assert!(multiply(&a, &eye, &mut right));
    assert_eq!(left, a);
    assert_eq!(right, a);
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// Transpose round-trips through a rectangular destination
        #[test]
        fn contract_prop_transpose_into_roundtrip(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f32> = (0..rows * cols)
                .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");

            let mut t = Matrix::<f32>::zeros(cols, rows).expect("valid");
            prop_assert!(a.transpose_into(&mut t));
            let mut back = Matrix::<f32>::zeros(rows, cols).expect("valid");
            prop_assert!(t.transpose_into(&mut back));
            prop_assert_eq!(&back, &a);
        }

        /// Clone independence: mutating a clone never leaks into the original
        #[test]
        fn contract_prop_clone_independent(
            rows in 1..=6usize,
            cols in 1..=6usize,
            value in -1000..1000i32,
        ) {
            let a = Matrix::filled(rows, cols, value).expect("valid");
            let mut b = a.clone();
            b.set(rows - 1, cols - 1, value.wrapping_add(1)).expect("in bounds");
            prop_assert_eq!(a.get(rows - 1, cols - 1).unwrap(), value);
        }
    }
}
