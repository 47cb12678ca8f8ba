//! Numeric element trait for matrix storage.
//!
//! Bundles the arithmetic bounds the operations need with the per-type
//! text-dump column policy, so both are resolved once per element type.

use std::fmt;

use num_traits::{Bounded, One, Zero};

/// Scalar types usable as matrix elements.
///
/// The column policy (`WIDTH`, `PRECISION`) controls the text dump: every
/// element is right-justified in `WIDTH` characters, floats with a fixed
/// number of fractional digits, so dumped columns stay visually aligned.
pub trait Element:
    Copy + PartialEq + PartialOrd + Zero + One + Bounded + fmt::Display + fmt::Debug
{
    /// Field width used by the text dump.
    const WIDTH: usize;

    /// Fractional digits used by the text dump, `None` for integral types.
    const PRECISION: Option<usize>;

    /// Widens to `f64` for determinant accumulation.
    fn to_f64(self) -> f64;

    /// Addition clamped to the type's representable range.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Addition that reports `None` instead of overflowing.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Multiplication that reports `None` instead of overflowing.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Renders the value right-justified under the type's column policy.
    #[must_use]
    fn padded(self) -> String {
        match Self::PRECISION {
            Some(prec) => format!("{self:>width$.prec$}", width = Self::WIDTH),
            None => format!("{self:>width$}", width = Self::WIDTH),
        }
    }
}

macro_rules! impl_int_element {
    ($($t:ty => $width:expr),* $(,)?) => {$(
        impl Element for $t {
            const WIDTH: usize = $width;
            const PRECISION: Option<usize> = None;

            #[allow(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

impl_int_element!(
    i8 => 7,
    u8 => 7,
    i16 => 7,
    u16 => 7,
    i32 => 7,
    u32 => 7,
    i64 => 14,
    u64 => 14,
    isize => 14,
    usize => 14,
);

impl Element for f32 {
    const WIDTH: usize = 10;
    const PRECISION: Option<usize> = Some(4);

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn saturating_add(self, rhs: Self) -> Self {
        let sum = self + rhs;
        if sum > f32::MAX {
            f32::MAX
        } else {
            sum
        }
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        let product = self * rhs;
        product.is_finite().then_some(product)
    }
}

impl Element for f64 {
    const WIDTH: usize = 16;
    const PRECISION: Option<usize> = Some(7);

    fn to_f64(self) -> f64 {
        self
    }

    fn saturating_add(self, rhs: Self) -> Self {
        let sum = self + rhs;
        if sum > f64::MAX {
            f64::MAX
        } else {
            sum
        }
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        let product = self * rhs;
        product.is_finite().then_some(product)
    }
}
