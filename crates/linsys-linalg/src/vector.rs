use std::{fmt, iter::Zip, slice};

use itertools::Itertools;
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal, MathematicalOps,
};

use crate::{LinalgError, Tolerance};

mod ops;

/// Unit of the angle returned by [`Vector::angle_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An `N`-element vector of [`Decimal`] coordinates, `N ≥ 1`.
///
/// # Construction
///
/// - [`Vector::new`] takes ownership of a list of coordinates and rejects empty lists.
/// - The freestanding [`vec2`] and [`vec3`] functions directly create vectors from provided values.
/// - [`Vector::zero`] and [`Vector::from_fn`] create vectors of a given dimension.
/// - [`Vector::from_f64s`] converts floating-point input.
/// - Vectors can be created from non-empty arrays using their [`From`] implementation.
///
/// # Arithmetic
///
/// `+`, `-` (binary and unary) and `*` (by a [`Decimal`] scalar) are implemented for both owned
/// and borrowed vectors, and always produce a new vector. Equality via [`PartialEq`] is exact and
/// element-wise; use the [`ApproxEq`][crate::approx::ApproxEq] impl or the tolerance-aware
/// predicates for everything else.
///
/// # Tolerances
///
/// Methods that test a property against zero come in pairs: `is_zero` uses
/// [`Tolerance::DEFAULT`], `is_zero_with` takes an explicit [`Tolerance`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector(Vec<Decimal>);

impl Vector {
    /// Creates a vector from a list of coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `coordinates` is empty.
    pub fn new(coordinates: Vec<Decimal>) -> Result<Self, LinalgError> {
        if coordinates.is_empty() {
            return Err(LinalgError::Empty);
        }
        Ok(Self(coordinates))
    }

    /// Creates a `dimension`-element vector containing all-zeroes.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn zero(dimension: usize) -> Self {
        Self::from_fn(dimension, |_| Decimal::ZERO)
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// let v = Vector::from_fn(3, |i| Decimal::from(i + 100));
    /// assert_eq!(v, [dec!(100), dec!(101), dec!(102)]);
    /// ```
    pub fn from_fn<F>(dimension: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> Decimal,
    {
        assert!(dimension > 0, "vectors need at least one dimension");
        Self((0..dimension).map(cb).collect())
    }

    /// Converts a list of floating-point coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotRepresentable`] if any coordinate is NaN, infinite or out of the
    /// range of [`Decimal`], and [`LinalgError::Empty`] if `coordinates` is empty.
    pub fn from_f64s(coordinates: &[f64]) -> Result<Self, LinalgError> {
        let coordinates = coordinates
            .iter()
            .map(|&c| {
                Decimal::from_f64(c).ok_or_else(|| LinalgError::NotRepresentable {
                    value: c.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coordinates)
    }

    /// Returns the number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Decimal] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Decimal> {
        self.0.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Decimal> {
        self.0
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Decimal) -> Decimal,
    {
        Self(self.0.iter().copied().map(f).collect())
    }

    /// Multiplies every coordinate with `k`.
    ///
    /// This is the same as `self * k`.
    pub fn scale(&self, k: Decimal) -> Self {
        self.map(|c| c * k)
    }

    /// Rounds every coordinate to `places` decimal places (half to even).
    pub fn round_dp(&self, places: u32) -> Self {
        self.map(|c| c.round_dp(places))
    }

    /// Computes the inner (dot) product `Σ self[i] * other[i]`.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// let a = vec3(dec!(1), dec!(3), dec!(-5));
    /// let b = vec3(dec!(4), dec!(-2), dec!(-1));
    /// assert_eq!(a.inner_product(&b), dec!(3));
    /// ```
    #[track_caller]
    pub fn inner_product(&self, other: &Self) -> Decimal {
        zip_exact(self, other).fold(Decimal::ZERO, |acc, (a, b)| acc + *a * *b)
    }

    /// Returns the squared Euclidean length of this vector.
    ///
    /// # Panics
    ///
    /// Panics if the squares overflow a [`Decimal`]. This happens once a coordinate exceeds about
    /// `2.8e14`; [`Vector::magnitude`] and [`Vector::is_zero_with`] do not square coordinates
    /// directly and accept any vector.
    pub fn magnitude_squared(&self) -> Decimal {
        self.inner_product(self)
    }

    /// Returns the Euclidean length `sqrt(Σ x²)` of this vector.
    ///
    /// The length is computed relative to the largest coordinate, so neither large nor tiny
    /// coordinates overflow or vanish when squared. A length beyond [`Decimal::MAX`] saturates to
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// assert_approx_eq!(vec2(dec!(3), dec!(-4)).magnitude(), dec!(5));
    /// let big = vec2(dec!(300000000000000000000), dec!(400000000000000000000));
    /// assert_approx_eq!(big.magnitude(), dec!(500000000000000000000));
    /// ```
    pub fn magnitude(&self) -> Decimal {
        self.checked_magnitude().unwrap_or(Decimal::MAX)
    }

    /// Returns the Euclidean length of this vector, or `None` if it exceeds [`Decimal::MAX`].
    pub fn checked_magnitude(&self) -> Option<Decimal> {
        let largest = self.iter().map(|c| c.abs()).max().unwrap_or(Decimal::ZERO);
        if largest.is_zero() {
            return Some(Decimal::ZERO);
        }

        // every ratio lies in [-1, 1], so the sum is bounded by the dimension
        let sum = self.iter().fold(Decimal::ZERO, |acc, c| {
            let ratio = *c / largest;
            acc + ratio * ratio
        });
        sum.sqrt()?.checked_mul(largest)
    }

    /// Returns whether the magnitude of this vector is below [`Tolerance::DEFAULT`].
    pub fn is_zero(&self) -> bool {
        self.is_zero_with(Tolerance::DEFAULT)
    }

    /// Returns whether the magnitude of this vector is below `tol.epsilon()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// let tiny = Tolerance::DEFAULT.with_epsilon(dec!(0.00000000000000000001));
    /// assert!(Vector::zero(3).is_zero_with(tiny));
    /// assert!(!vec2(dec!(0.0000000000000000001), dec!(0)).is_zero_with(tiny));
    /// assert!(!vec2(dec!(300000000000000), dec!(1)).is_zero());
    /// ```
    pub fn is_zero_with(&self, tol: Tolerance) -> bool {
        // a vector shorter than epsilon has every coordinate below epsilon
        if !self.iter().all(|c| tol.is_near_zero(*c)) {
            return false;
        }
        self.checked_magnitude()
            .map_or(false, |magnitude| magnitude < tol.epsilon())
    }

    /// Multiplies every coordinate with `k`, or returns `None` if a product overflows.
    pub fn checked_scale(&self, k: Decimal) -> Option<Self> {
        self.iter()
            .map(|c| c.checked_mul(k))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Adds `other` coordinate-wise, or returns `None` if a sum overflows.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    #[track_caller]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        zip_exact(self, other)
            .map(|(a, b)| a.checked_add(*b))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroVector`] if `self` is the zero vector.
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        self.normalize_with(Tolerance::DEFAULT)
    }

    pub fn normalize_with(&self, tol: Tolerance) -> Result<Self, LinalgError> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() || self.is_zero_with(tol) {
            return Err(LinalgError::ZeroVector);
        }
        Ok(self.scale(Decimal::ONE / magnitude))
    }

    /// Computes the smallest positive angle between `self` and `other`.
    ///
    /// The cosine is clamped to `[-1, 1]` before taking its arc cosine, so that rounding of the
    /// normalized vectors cannot leave the domain of `acos`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroVector`] if either vector is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// let x = vec2(dec!(1), dec!(0));
    /// let y = vec2(dec!(0), dec!(2));
    /// assert_approx_eq!(x.angle_to(&y, AngleUnit::Degrees)?, 90.0).abs(1e-9);
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn angle_to(&self, other: &Self, unit: AngleUnit) -> Result<f64, LinalgError> {
        self.angle_to_with(other, unit, Tolerance::DEFAULT)
    }

    pub fn angle_to_with(
        &self,
        other: &Self,
        unit: AngleUnit,
        tol: Tolerance,
    ) -> Result<f64, LinalgError> {
        let a = self.normalize_with(tol)?;
        let b = other.normalize_with(tol)?;
        let cos = a
            .inner_product(&b)
            .clamp(Decimal::NEGATIVE_ONE, Decimal::ONE);
        let cos = cos.to_f64().ok_or_else(|| LinalgError::NotRepresentable {
            value: cos.to_string(),
        })?;

        let radians = cos.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Returns whether `self` and `other` are scalar multiples of each other.
    ///
    /// The zero vector is parallel to every vector.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// let v = vec3(dec!(-7.579), dec!(-7.88), dec!(0));
    /// assert!(v.is_parallel_to(&(&v * dec!(-2.5))));
    /// assert!(!v.is_parallel_to(&vec3(dec!(22.737), dec!(23.64), dec!(1))));
    /// ```
    #[track_caller]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.is_parallel_to_with(other, Tolerance::DEFAULT)
    }

    #[track_caller]
    pub fn is_parallel_to_with(&self, other: &Self, tol: Tolerance) -> bool {
        if self.is_zero_with(tol) || other.is_zero_with(tol) {
            return true;
        }

        let mut ratios = Vec::with_capacity(self.dimension());
        for (a, b) in zip_exact(self, other) {
            if tol.is_near_zero(*b) {
                // `self` must vanish wherever `other` does
                if !tol.is_near_zero(*a) {
                    return false;
                }
                continue;
            }
            // a ratio beyond `Decimal::MAX` cannot match a representable one
            let Some(ratio) = a.checked_div(*b) else {
                return false;
            };
            ratios.push(ratio.round_dp(tol.places()));
        }
        ratios.into_iter().all_equal()
    }

    /// Returns whether the inner product of `self` and `other` is zero.
    ///
    /// The inner product is rounded to [`Tolerance::places`] decimal places before comparing it
    /// against the tolerance. The zero vector is orthogonal to every vector.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    #[track_caller]
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        self.is_orthogonal_to_with(other, Tolerance::DEFAULT)
    }

    #[track_caller]
    pub fn is_orthogonal_to_with(&self, other: &Self, tol: Tolerance) -> bool {
        if self.is_zero_with(tol) || other.is_zero_with(tol) {
            return true;
        }
        tol.is_near_zero(self.inner_product(other).round_dp(tol.places()))
    }

    /// Returns the index of the first coordinate that is not zero within [`Tolerance::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NoNonzeroElements`] if every coordinate is (near) zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// assert_eq!(vec3(dec!(0), dec!(0.00000000000001), dec!(2)).first_nonzero_index(), Ok(2));
    /// assert_eq!(
    ///     vec2(dec!(0), dec!(0)).first_nonzero_index(),
    ///     Err(LinalgError::NoNonzeroElements),
    /// );
    /// ```
    pub fn first_nonzero_index(&self) -> Result<usize, LinalgError> {
        self.first_nonzero_index_with(Tolerance::DEFAULT)
    }

    pub fn first_nonzero_index_with(&self, tol: Tolerance) -> Result<usize, LinalgError> {
        self.iter()
            .position(|&c| !tol.is_near_zero(c))
            .ok_or(LinalgError::NoNonzeroElements)
    }

    /// Projects `self` onto the direction of `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroVector`] if `basis` is the zero vector.
    pub fn project_onto(&self, basis: &Self) -> Result<Self, LinalgError> {
        self.project_onto_with(basis, Tolerance::DEFAULT)
    }

    pub fn project_onto_with(&self, basis: &Self, tol: Tolerance) -> Result<Self, LinalgError> {
        let unit = basis.normalize_with(tol)?;
        let length = self.inner_product(&unit);
        Ok(unit.scale(length))
    }

    /// Returns the component of `self` that is perpendicular to `basis`.
    ///
    /// `self.project_onto(basis)? + self.component_orthogonal_to(basis)?` is `self` (up to
    /// rounding).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ZeroVector`] if `basis` is the zero vector.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self, LinalgError> {
        self.component_orthogonal_to_with(basis, Tolerance::DEFAULT)
    }

    pub fn component_orthogonal_to_with(
        &self,
        basis: &Self,
        tol: Tolerance,
    ) -> Result<Self, LinalgError> {
        Ok(self - &self.project_onto_with(basis, tol)?)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::UnsupportedDimension`] unless both vectors are 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// # use rust_decimal_macros::dec;
    /// let x = vec3(dec!(1), dec!(0), dec!(0));
    /// let y = vec3(dec!(0), dec!(1), dec!(0));
    /// assert_eq!(x.cross(&y)?, vec3(dec!(0), dec!(0), dec!(1)));
    /// assert_eq!(y.cross(&x)?, -vec3(dec!(0), dec!(0), dec!(1)));
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self, LinalgError> {
        match (self.as_slice(), other.as_slice()) {
            (&[a1, a2, a3], &[b1, b2, b3]) => {
                #[rustfmt::skip]
                let cross = vec3(
                    a2 * b3 - a3 * b2,
                    a3 * b1 - a1 * b3,
                    a1 * b2 - a2 * b1,
                );
                Ok(cross)
            }
            _ => Err(LinalgError::UnsupportedDimension {
                operation: "cross product",
                dimension: if self.dimension() == 3 {
                    other.dimension()
                } else {
                    self.dimension()
                },
            }),
        }
    }

    /// Returns the area of the parallelogram spanned by `self` and `other` (3D only).
    pub fn area_of_parallelogram_with(&self, other: &Self) -> Result<Decimal, LinalgError> {
        Ok(self.cross(other)?.magnitude())
    }

    /// Returns the area of the triangle spanned by `self` and `other` (3D only).
    pub fn area_of_triangle_with(&self, other: &Self) -> Result<Decimal, LinalgError> {
        Ok(self.area_of_parallelogram_with(other)? / Decimal::TWO)
    }
}

impl<const N: usize> From<[Decimal; N]> for Vector {
    /// # Panics
    ///
    /// Panics if `N` is 0.
    fn from(value: [Decimal; N]) -> Self {
        assert!(N > 0, "vectors need at least one dimension");
        Self(value.into())
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = LinalgError;

    fn try_from(value: Vec<Decimal>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vector> for Vec<Decimal> {
    fn from(value: Vector) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Decimal]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[Decimal] {
        &self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: ({})", self.0.iter().format(", "))
    }
}

/// Constructs a 2-dimensional [`Vector`] from its two elements.
#[inline]
pub fn vec2(x: Decimal, y: Decimal) -> Vector {
    Vector(vec![x, y])
}

/// Constructs a 3-dimensional [`Vector`] from its three elements.
#[inline]
pub fn vec3(x: Decimal, y: Decimal, z: Decimal) -> Vector {
    Vector(vec![x, y, z])
}

/// A variant of [`Iterator::zip`] over two vectors that panics if their dimensions differ.
#[track_caller]
fn zip_exact<'a>(
    a: &'a Vector,
    b: &'a Vector,
) -> Zip<slice::Iter<'a, Decimal>, slice::Iter<'a, Decimal>> {
    assert_eq!(
        a.dimension(),
        b.dimension(),
        "vector operation on mismatched dimensions"
    );

    a.iter().zip(b.iter())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rust_decimal_macros::dec;

    use crate::assert_approx_eq;

    use super::*;

    fn random_vector(rng: &mut fastrand::Rng, dimension: usize) -> Vector {
        Vector::from_fn(dimension, |_| Decimal::new(rng.i64(-20_000..20_000), 3))
    }

    #[test]
    fn construction() {
        assert_eq!(Vector::new(vec![]), Err(LinalgError::Empty));
        assert_eq!(Vector::zero(2), [dec!(0), dec!(0)]);
        assert_eq!(Vector::try_from(vec![dec!(1)]).unwrap().dimension(), 1);
        assert!(matches!(
            Vector::from_f64s(&[1.0, f64::NAN]),
            Err(LinalgError::NotRepresentable { .. })
        ));
        assert_eq!(
            Vector::from_f64s(&[8.25, -9.5]).unwrap(),
            vec2(dec!(8.25), dec!(-9.5))
        );
    }

    #[test]
    #[should_panic(expected = "at least one dimension")]
    fn zero_dimensional() {
        Vector::zero(0);
    }

    #[test]
    fn fmt() {
        let v = vec3(dec!(1.671), dec!(-1.012), dec!(-0.318));
        assert_eq!(v.to_string(), "Vector: (1.671, -1.012, -0.318)");
        assert_eq!(format!("{:?}", v), "(1.671, -1.012, -0.318)");
    }

    #[test]
    fn arithmetic() {
        let a = vec2(dec!(8.218), dec!(-9.341));
        let b = vec2(dec!(-1.129), dec!(2.111));
        assert_eq!(&a + &b, vec2(dec!(7.089), dec!(-7.230)));

        let a = vec2(dec!(7.119), dec!(8.215));
        let b = vec2(dec!(-8.223), dec!(0.878));
        assert_eq!(a - b, vec2(dec!(15.342), dec!(7.337)));

        let v = vec3(dec!(1.671), dec!(-1.012), dec!(-0.318));
        assert_eq!(
            v * dec!(7.41),
            vec3(dec!(12.38211), dec!(-7.49892), dec!(-2.35638))
        );
    }

    #[test]
    #[should_panic(expected = "mismatched dimensions")]
    fn mismatched_add() {
        let _ = vec2(dec!(1), dec!(2)) + vec3(dec!(1), dec!(2), dec!(3));
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = vec3(dec!(-0.221), dec!(7.437), dec!(0));
        assert_approx_eq!(v.magnitude(), dec!(7.440282924728)).abs(dec!(0.000000000001));

        let n = vec3(dec!(5.581), dec!(-2.136), dec!(0)).normalize().unwrap();
        assert_approx_eq!(n, vec3(dec!(0.933935), dec!(-0.357442), dec!(0))).abs(dec!(0.000001));
        assert_approx_eq!(n.magnitude(), Decimal::ONE);

        assert_eq!(Vector::zero(3).normalize(), Err(LinalgError::ZeroVector));
    }

    #[test]
    fn zero_matches_magnitude() {
        let tiny = vec3(dec!(0.00000000001), dec!(0), dec!(-0.00000000002));
        assert!(tiny.is_zero());
        assert!(tiny.magnitude() < Tolerance::DEFAULT.epsilon());

        let small = vec2(dec!(0.0000000001), dec!(0));
        assert!(!small.is_zero());
    }

    #[test]
    fn small_epsilon() {
        let tol = Tolerance::DEFAULT.with_epsilon(dec!(0.000000000000001));
        assert!(Vector::zero(3).is_zero_with(tol));
        assert_eq!(Vector::zero(3).normalize_with(tol), Err(LinalgError::ZeroVector));
        assert!(vec2(dec!(0.0000000000000001), dec!(0)).is_zero_with(tol));
        assert!(!vec2(dec!(0.00000000000001), dec!(0)).is_zero_with(tol));

        // below every representable epsilon
        let finest = Tolerance::DEFAULT.with_epsilon(Decimal::ZERO);
        assert!(Vector::zero(2).is_zero_with(finest));
        assert_eq!(Vector::zero(2).normalize_with(finest), Err(LinalgError::ZeroVector));
        let n = vec2(dec!(0.000000000000000000000000001), dec!(0))
            .normalize_with(finest)
            .unwrap();
        assert_approx_eq!(n, vec2(dec!(1), dec!(0)));

        // the coordinates pass individually, their length does not
        let tol = Tolerance::DEFAULT.with_epsilon(dec!(0.00000000000001));
        let v = Vector::from_fn(4, |_| dec!(0.000000000000009));
        assert!(!v.is_zero_with(tol));
    }

    #[test]
    fn large_coordinates() {
        let v = vec2(dec!(300000000000000), dec!(1));
        assert!(!v.is_zero());
        assert_approx_eq!(v.magnitude(), dec!(300000000000000));
        assert_approx_eq!(v.normalize().unwrap().magnitude(), Decimal::ONE);
        assert!(v.is_parallel_to(&v.scale(dec!(-2))));
        assert!(!v.is_parallel_to(&vec2(dec!(1), dec!(1))));

        let huge = vec3(Decimal::MAX, Decimal::MAX, dec!(1));
        assert!(!huge.is_zero());
        assert_eq!(huge.checked_magnitude(), None);
        assert_eq!(huge.magnitude(), Decimal::MAX);

        assert_eq!(huge.checked_scale(dec!(2)), None);
        assert_eq!(huge.checked_add(&huge), None);
        assert_eq!(
            v.checked_scale(dec!(2)),
            Some(vec2(dec!(600000000000000), dec!(2)))
        );
        assert_eq!(v.checked_add(&v), Some(&v * dec!(2)));
    }

    #[test]
    fn angle() {
        let a = vec2(dec!(3.183), dec!(-7.627));
        let b = vec2(dec!(-2.668), dec!(5.319));
        assert_approx_eq!(a.angle_to(&b, AngleUnit::Radians).unwrap(), 3.0720263098372476)
            .abs(1e-9);

        let a = vec3(dec!(7.35), dec!(0.221), dec!(5.188));
        let b = vec3(dec!(2.751), dec!(8.259), dec!(3.985));
        assert_approx_eq!(a.angle_to(&b, AngleUnit::Degrees).unwrap(), 60.27581120523091)
            .abs(1e-9);

        let v = vec2(dec!(1), dec!(1));
        assert_approx_eq!(v.angle_to(&-&v, AngleUnit::Radians).unwrap(), PI).abs(1e-9);
        assert_approx_eq!(v.angle_to(&v, AngleUnit::Radians).unwrap(), 0.0).abs(1e-6);

        assert_eq!(
            v.angle_to(&Vector::zero(2), AngleUnit::Radians),
            Err(LinalgError::ZeroVector)
        );
    }

    #[test]
    fn parallel_and_orthogonal() {
        let a = vec2(dec!(-7.579), dec!(-7.88));
        let b = vec2(dec!(22.737), dec!(23.64));
        assert!(a.is_parallel_to(&b));
        assert!(!a.is_orthogonal_to(&b));

        let a = vec3(dec!(-2.029), dec!(9.97), dec!(4.172));
        let b = vec3(dec!(-9.231), dec!(-6.639), dec!(-7.245));
        assert!(!a.is_parallel_to(&b));
        assert!(!a.is_orthogonal_to(&b));

        let a = vec3(dec!(-2.328), dec!(-7.284), dec!(-1.214));
        let b = vec3(dec!(-1.821), dec!(1.072), dec!(-2.94));
        assert!(!a.is_parallel_to(&b));
        assert!(a.is_orthogonal_to(&b));

        let a = vec3(dec!(2.118), dec!(4.827), dec!(0));
        let b = vec3(dec!(0), dec!(0), dec!(0));
        assert!(a.is_parallel_to(&b));
        assert!(a.is_orthogonal_to(&b));

        // A ratio is undefined where `other` vanishes; `self` has to vanish there too.
        let a = vec2(dec!(0), dec!(1));
        let b = vec2(dec!(1), dec!(0));
        assert!(!a.is_parallel_to(&b));
        assert!(a.is_orthogonal_to(&b));
        assert!(a.is_parallel_to(&vec2(dec!(0), dec!(-3))));
    }

    #[test]
    fn projection() {
        let v = vec2(dec!(3.039), dec!(1.879));
        let b = vec2(dec!(0.825), dec!(2.036));
        assert_approx_eq!(v.project_onto(&b).unwrap(), vec2(dec!(1.083), dec!(2.672)))
            .abs(dec!(0.001));

        let v = vec3(dec!(-9.88), dec!(-3.264), dec!(-8.159));
        let b = vec3(dec!(-2.155), dec!(-9.353), dec!(-9.473));
        assert_approx_eq!(
            v.component_orthogonal_to(&b).unwrap(),
            vec3(dec!(-8.350), dec!(3.376), dec!(-1.434))
        )
        .abs(dec!(0.001));

        let v = vec3(dec!(3.009), dec!(-6.172), dec!(3.692));
        let b = vec3(dec!(6.404), dec!(-9.144), dec!(2.759));
        let parallel = v.project_onto(&b).unwrap();
        let perpendicular = v.component_orthogonal_to(&b).unwrap();
        assert!(parallel.is_parallel_to(&b));
        assert!(perpendicular.is_orthogonal_to(&b));
        assert_approx_eq!(&parallel + &perpendicular, v);

        assert_eq!(v.project_onto(&Vector::zero(3)), Err(LinalgError::ZeroVector));
    }

    #[test]
    fn cross_and_areas() {
        let v = vec3(dec!(8.462), dec!(7.893), dec!(-8.187));
        let w = vec3(dec!(6.984), dec!(-5.975), dec!(4.778));
        assert_eq!(
            v.cross(&w).unwrap(),
            vec3(dec!(-11.204571), dec!(-97.609444), dec!(-105.685162))
        );

        let v = vec3(dec!(-8.987), dec!(-9.838), dec!(5.031));
        let w = vec3(dec!(-4.268), dec!(-1.861), dec!(-8.866));
        assert_approx_eq!(v.area_of_parallelogram_with(&w).unwrap(), dec!(142.122))
            .abs(dec!(0.001));

        let v = vec3(dec!(1.5), dec!(9.547), dec!(3.691));
        let w = vec3(dec!(-6.007), dec!(0.124), dec!(5.772));
        assert_approx_eq!(v.area_of_triangle_with(&w).unwrap(), dec!(42.565)).abs(dec!(0.001));

        assert_eq!(
            vec2(dec!(1), dec!(0)).cross(&vec2(dec!(0), dec!(1))),
            Err(LinalgError::UnsupportedDimension {
                operation: "cross product",
                dimension: 2
            })
        );
    }

    #[test]
    fn random_properties() {
        let mut rng = fastrand::Rng::with_seed(0x5eed_1a55);
        for _ in 0..200 {
            let dimension = rng.usize(1..=5);
            let v = random_vector(&mut rng, dimension);
            let w = random_vector(&mut rng, dimension);

            assert_eq!(v.is_zero(), v.magnitude() < Tolerance::DEFAULT.epsilon());
            assert_eq!(&(&v + &w) - &w, v);

            if !v.is_zero() {
                assert_approx_eq!(v.normalize().unwrap().magnitude(), Decimal::ONE);

                let sign = if rng.bool() { dec!(1) } else { dec!(-1) };
                let k = Decimal::from(rng.i64(1..=9)) * sign;
                assert!(v.is_parallel_to(&v.scale(k)), "{v:?} * {k}");
            }

            if dimension == 3 {
                let cross = v.cross(&w).unwrap();
                assert!(cross.is_orthogonal_to(&v));
                assert!(cross.is_orthogonal_to(&w));
            }
        }
    }
}
