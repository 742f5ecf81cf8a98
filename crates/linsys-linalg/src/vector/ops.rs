//! Implementations of `std::ops`.

use std::ops::{Add, Index, Mul, Neg, Sub};

use rust_decimal::Decimal;

use crate::approx::ApproxEq;

use super::{zip_exact, Vector};

impl Index<usize> for Vector {
    type Output = Decimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> PartialEq<[Decimal; N]> for Vector {
    fn eq(&self, other: &[Decimal; N]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<Vector> for [Decimal; N] {
    fn eq(&self, other: &Vector) -> bool {
        *self == *other.0
    }
}

impl PartialEq<[Decimal]> for Vector {
    fn eq(&self, other: &[Decimal]) -> bool {
        self.0 == other
    }
}

impl ApproxEq for Vector {
    type Tolerance = Decimal;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the vectors have different dimensions.
impl Add<&Vector> for &Vector {
    type Output = Vector;

    #[track_caller]
    fn add(self, rhs: &Vector) -> Self::Output {
        Vector(zip_exact(self, rhs).map(|(l, r)| *l + *r).collect())
    }
}

/// Element-wise addition.
///
/// # Panics
///
/// Panics if the vectors have different dimensions.
impl Add<Vector> for Vector {
    type Output = Vector;

    #[track_caller]
    fn add(self, rhs: Vector) -> Self::Output {
        &self + &rhs
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the vectors have different dimensions.
impl Sub<&Vector> for &Vector {
    type Output = Vector;

    #[track_caller]
    fn sub(self, rhs: &Vector) -> Self::Output {
        Vector(zip_exact(self, rhs).map(|(l, r)| *l - *r).collect())
    }
}

/// Element-wise subtraction.
///
/// # Panics
///
/// Panics if the vectors have different dimensions.
impl Sub<Vector> for Vector {
    type Output = Vector;

    #[track_caller]
    fn sub(self, rhs: Vector) -> Self::Output {
        &self - &rhs
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<Decimal> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<Decimal> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.scale(rhs)
    }
}

// NB: there are no `*Assign` impls, vectors are only ever replaced wholesale.
