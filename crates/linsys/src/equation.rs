//! Linear equations of the form `normal · x = constant`.

use std::fmt;

use linsys_linalg::{Decimal, LinalgError, Tolerance, Vector};

use crate::Result;

/// Declares a wrapper around [`Equation`] that only admits equations of one fixed dimension.
macro_rules! fixed_dimension_equation {
    ($(#[$attr:meta])* $name:ident, $dim:literal) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq)]
        pub struct $name(Equation);

        impl $name {
            pub const DIMENSION: usize = $dim;

            /// Creates an equation with the default [`Tolerance`][linsys_linalg::Tolerance].
            ///
            /// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `normal`
            /// has the wrong dimension.
            pub fn new(normal: Vector, constant: Decimal) -> crate::Result<Self> {
                Self::try_from(Equation::new(normal, constant))
            }

            pub fn with_tolerance(
                normal: Vector,
                constant: Decimal,
                tolerance: linsys_linalg::Tolerance,
            ) -> crate::Result<Self> {
                Self::try_from(Equation::with_tolerance(normal, constant, tolerance))
            }

            /// Creates the equation `0 = 0`.
            pub fn zero() -> Self {
                Self(Equation::zero($dim))
            }

            #[inline]
            pub fn as_equation(&self) -> &Equation {
                &self.0
            }

            #[inline]
            pub fn into_equation(self) -> Equation {
                self.0
            }

            pub fn is_parallel_to(&self, other: &Self) -> bool {
                self.0.is_parallel_to(&other.0)
            }
        }

        impl TryFrom<Equation> for $name {
            type Error = crate::Error;

            fn try_from(equation: Equation) -> crate::Result<Self> {
                if equation.dimension() != $dim {
                    return Err(crate::Error::DimensionMismatch {
                        expected: $dim,
                        found: equation.dimension(),
                    });
                }
                Ok(Self(equation))
            }
        }

        impl From<$name> for Equation {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<Equation> for $name {
            fn eq(&self, other: &Equation) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for Equation {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = Equation;

            fn deref(&self) -> &Equation {
                &self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("normal", self.0.normal())
                    .field("constant", &self.0.constant())
                    .finish()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

mod line;
mod plane;

pub use line::*;
pub use plane::*;

/// Number of decimal places coefficients are rounded to when an [`Equation`] is displayed.
const DISPLAY_PLACES: u32 = 3;

/// A linear equation `normal · x = constant` in any dimension.
///
/// Equations compare *geometrically*: two equations are equal if they describe the same set of
/// points, regardless of scaling (see [`Equation::coincides_with`]).
///
/// Every equation carries a [`Tolerance`] that is used for its near-zero and parallelism checks.
/// Equations stored in a [`LinearSystem`][crate::LinearSystem] use the tolerance of the system.
#[derive(Clone)]
pub struct Equation {
    normal: Vector,
    constant: Decimal,
    basepoint: Option<Vector>,
    tolerance: Tolerance,
}

impl Equation {
    /// Creates an equation with the default [`Tolerance`].
    pub fn new(normal: Vector, constant: Decimal) -> Self {
        Self::with_tolerance(normal, constant, Tolerance::DEFAULT)
    }

    /// Creates the equation `0 = 0` in `dimension`-dimensional space.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn zero(dimension: usize) -> Self {
        Self::new(Vector::zero(dimension), Decimal::ZERO)
    }

    pub fn with_tolerance(normal: Vector, constant: Decimal, tolerance: Tolerance) -> Self {
        let basepoint = basepoint(&normal, constant, tolerance);
        Self {
            normal,
            constant,
            basepoint,
            tolerance,
        }
    }

    /// Returns `self`, using `tolerance` for all further checks.
    pub(crate) fn retag(self, tolerance: Tolerance) -> Self {
        if self.tolerance == tolerance {
            self
        } else {
            Self::with_tolerance(self.normal, self.constant, tolerance)
        }
    }

    #[inline]
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    #[inline]
    pub fn constant(&self) -> Decimal {
        self.constant
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    /// Returns a point that satisfies this equation.
    ///
    /// The point is zero in every coordinate except the first one with a nonzero coefficient. If
    /// that coordinate would exceed the range of [`Decimal`], the coordinate with the largest
    /// coefficient is used instead (and saturates if even that is out of range).
    /// Equations without any nonzero coefficient (`0 = c`) have no basepoint.
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns the coefficient of the variable at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the equation's dimension.
    #[inline]
    pub fn coefficient(&self, index: usize) -> Decimal {
        self.normal[index]
    }

    /// Returns the index of the first coefficient that isn't zero.
    pub fn first_nonzero_index(&self) -> Result<usize> {
        Ok(self.normal.first_nonzero_index_with(self.tolerance)?)
    }

    /// Returns whether the normals of `self` and `other` are parallel.
    ///
    /// This, like [`Equation::coincides_with`], uses the stricter of both tolerances.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        let tol = self.tolerance.strictest(other.tolerance);
        self.normal.is_parallel_to_with(&other.normal, tol)
    }

    /// Returns whether `self` and `other` describe the same set of points.
    ///
    /// Equations with a normal vector coincide when the vector between their basepoints is zero,
    /// or when they are parallel and that vector is orthogonal to both normals.
    ///
    /// Equations without a nonzero coefficient describe either all of space (`0 = 0`) or nothing
    /// (`0 = c`), and only coincide with another such equation describing the same set.
    ///
    /// The comparison uses the stricter of both equations' tolerances, which keeps it symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::*;
    /// # use rust_decimal_macros::dec;
    /// let a = Equation::new(vec2(dec!(1), dec!(1)), dec!(2));
    /// let b = Equation::new(vec2(dec!(-3), dec!(-3)), dec!(-6));
    /// assert!(a.coincides_with(&b));
    /// assert_eq!(a, b);
    ///
    /// let c = Equation::new(vec2(dec!(1), dec!(1)), dec!(3));
    /// assert_ne!(a, c);
    /// ```
    pub fn coincides_with(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        let tol = self.tolerance.strictest(other.tolerance);
        match (&self.basepoint, &other.basepoint) {
            (Some(mine), Some(theirs)) => {
                // basepoints too far apart to subtract are distinct
                let Some(between) = mine.checked_add(&-theirs) else {
                    return false;
                };
                between.is_zero_with(tol)
                    || (self.is_parallel_to(other)
                        && between.is_orthogonal_to_with(&self.normal, tol)
                        && between.is_orthogonal_to_with(&other.normal, tol))
            }
            (None, None) => tol.is_near_zero(self.constant) == tol.is_near_zero(other.constant),
            _ => false,
        }
    }

    /// Returns whether this equation reads `0 = c` for a nonzero `c`.
    pub fn is_inconsistent(&self) -> bool {
        self.basepoint.is_none() && !self.tolerance.is_near_zero(self.constant)
    }

    /// Multiplies both sides of the equation by `k`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Overflow`] if a product exceeds the range of [`Decimal`].
    pub fn scaled(&self, k: Decimal) -> Result<Self> {
        let normal = self.normal.checked_scale(k).ok_or(OVERFLOW_IN_SCALE)?;
        let constant = self.constant.checked_mul(k).ok_or(OVERFLOW_IN_SCALE)?;
        Ok(Self::with_tolerance(normal, constant, self.tolerance))
    }

    /// Adds `k` times `source` to this equation.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Overflow`] if an intermediate result exceeds the range of
    /// [`Decimal`].
    ///
    /// # Panics
    ///
    /// Panics if the equations have different dimensions.
    #[track_caller]
    pub fn plus_scaled(&self, source: &Self, k: Decimal) -> Result<Self> {
        let addend = source.scaled(k)?;
        let normal = self
            .normal
            .checked_add(&addend.normal)
            .ok_or(OVERFLOW_IN_ADD)?;
        let constant = self
            .constant
            .checked_add(addend.constant)
            .ok_or(OVERFLOW_IN_ADD)?;
        Ok(Self::with_tolerance(normal, constant, self.tolerance))
    }
}

const OVERFLOW_IN_SCALE: LinalgError = LinalgError::Overflow {
    operation: "scaling an equation",
};

const OVERFLOW_IN_ADD: LinalgError = LinalgError::Overflow {
    operation: "adding equations",
};

fn basepoint(normal: &Vector, constant: Decimal, tolerance: Tolerance) -> Option<Vector> {
    // `NoNonzeroElements` is the only error here, and means there's no basepoint.
    let first = normal.first_nonzero_index_with(tolerance).ok()?;
    let (index, value) = match constant.checked_div(normal[first]) {
        Some(value) => (first, value),
        None => {
            // the largest coefficient moves the point the least
            let (index, &largest) = normal.iter().enumerate().max_by_key(|(_, c)| c.abs())?;
            let value = constant.checked_div(largest).unwrap_or({
                if constant.is_sign_negative() == largest.is_sign_negative() {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                }
            });
            (index, value)
        }
    };
    Some(Vector::from_fn(normal.dimension(), |i| {
        if i == index {
            value
        } else {
            Decimal::ZERO
        }
    }))
}

impl PartialEq for Equation {
    fn eq(&self, other: &Self) -> bool {
        self.coincides_with(other)
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
            .field("normal", &self.normal)
            .field("constant", &self.constant)
            .finish()
    }
}

/// Formats the equation like `x_1 - 2.500x_2 + x_3 = 4`.
///
/// Coefficients are rounded to 3 decimal places, and variables whose coefficient rounds to zero are
/// left out.
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normal.first_nonzero_index_with(self.tolerance) {
            Ok(initial) => {
                let mut first = true;
                for (index, &coefficient) in self.normal.iter().enumerate() {
                    if coefficient.round_dp(DISPLAY_PLACES).is_zero() {
                        continue;
                    }
                    if !first {
                        f.write_str(" ")?;
                    }
                    first = false;

                    write_coefficient(f, coefficient, index == initial)?;
                    write!(f, "x_{}", index + 1)?;
                }
            }
            Err(_) => f.write_str("0")?,
        }

        let constant = if self.tolerance.is_near_zero(self.constant) {
            Decimal::ZERO
        } else {
            self.constant
        };
        write!(f, " = {}", round_for_display(constant))
    }
}

fn write_coefficient(
    f: &mut fmt::Formatter<'_>,
    coefficient: Decimal,
    initial: bool,
) -> fmt::Result {
    let coefficient = round_for_display(coefficient);
    let negative = coefficient.is_sign_negative();

    match (initial, negative) {
        (true, true) => f.write_str("-")?,
        (true, false) => {}
        (false, true) => f.write_str("- ")?,
        (false, false) => f.write_str("+ ")?,
    }

    let magnitude = coefficient.abs();
    if magnitude != Decimal::ONE {
        write!(f, "{magnitude}")?;
    }
    Ok(())
}

/// Rounds half-to-even; integers lose their fractional part, everything else keeps 3 places.
fn round_for_display(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(DISPLAY_PLACES);
    if rounded.is_zero() {
        // Also gets rid of `-0`.
        return Decimal::ZERO;
    }
    if rounded.fract().is_zero() {
        rounded.trunc().normalize()
    } else {
        rounded.rescale(DISPLAY_PLACES);
        rounded
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, vec2, vec3};
    use rust_decimal_macros::dec;

    use crate::Error;

    use super::*;

    #[test]
    fn basepoint() {
        let eq = Equation::new(vec3(dec!(0), dec!(2), dec!(4)), dec!(5));
        assert_eq!(eq.basepoint(), Some(&vec3(dec!(0), dec!(2.5), dec!(0))));
        assert_eq!(eq.first_nonzero_index(), Ok(1));

        let eq = Equation::new(vec3(dec!(0.00000000001), dec!(0), dec!(0)), dec!(5));
        assert_eq!(eq.basepoint(), None);
        assert!(eq.first_nonzero_index().unwrap_err().is_no_nonzero_elements());
        assert!(eq.is_inconsistent());

        // `1e20 / 1e-9` is out of range, `1e20 / 2` is not
        let eq = Equation::new(
            vec2(dec!(0.000000001), dec!(2)),
            dec!(100000000000000000000),
        );
        assert_eq!(
            eq.basepoint(),
            Some(&vec2(dec!(0), dec!(50000000000000000000)))
        );
        assert!(!eq.is_inconsistent());

        let eq = Equation::zero(4);
        assert_eq!(eq.dimension(), 4);
        assert_eq!(eq.basepoint(), None);
        assert!(!eq.is_inconsistent());
    }

    #[test]
    fn coincidence() {
        let a = Equation::new(vec3(dec!(1), dec!(2), dec!(3)), dec!(6));
        let b = a.scaled(dec!(-0.5)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, a.scaled(dec!(0)).unwrap());

        let shifted = Equation::new(vec3(dec!(1), dec!(2), dec!(3)), dec!(7));
        assert!(a.is_parallel_to(&shifted));
        assert_ne!(a, shifted);

        // Different dimensions never coincide.
        assert_ne!(Equation::zero(2), Equation::zero(3));
    }

    #[test]
    fn degenerate_coincidence() {
        let everything = Equation::zero(3);
        let nothing = Equation::new(Vector::zero(3), dec!(1));
        let also_nothing = Equation::new(Vector::zero(3), dec!(-4));
        let plane = Equation::new(vec3(dec!(1), dec!(0), dec!(0)), dec!(0));

        assert_eq!(everything, Equation::zero(3));
        assert_eq!(nothing, also_nothing);
        assert_ne!(everything, nothing);
        assert_ne!(plane, everything);
        assert_ne!(everything, plane);
    }

    #[test]
    fn row_arithmetic() {
        let target = Equation::new(vec2(dec!(1), dec!(2)), dec!(3));
        let source = Equation::new(vec2(dec!(2), dec!(-1)), dec!(1));
        let sum = target.plus_scaled(&source, dec!(-0.5)).unwrap();
        assert_eq!(sum.normal(), &vec2(dec!(0), dec!(2.5)));
        assert_eq!(sum.constant(), dec!(2.5));
        assert_eq!(sum.coefficient(1), dec!(2.5));

        let scaled = source.scaled(Decimal::ONE / dec!(3)).unwrap();
        assert_approx_eq!(scaled.constant() * dec!(3), dec!(1));
    }

    #[test]
    fn row_arithmetic_overflow() {
        let huge = Equation::new(vec2(Decimal::MAX, dec!(1)), dec!(1));
        assert_eq!(
            huge.scaled(dec!(2)),
            Err(Error::Linalg(LinalgError::Overflow {
                operation: "scaling an equation"
            }))
        );
        assert_eq!(
            huge.plus_scaled(&huge, dec!(1)),
            Err(Error::Linalg(LinalgError::Overflow {
                operation: "adding equations"
            }))
        );
        assert_eq!(
            huge.plus_scaled(&huge, dec!(-1)).unwrap(),
            Equation::new(Vector::zero(2), dec!(0))
        );
    }

    #[test]
    fn large_coefficients() {
        let a = Equation::new(vec2(dec!(300000000000000), dec!(1)), dec!(1));
        let b = a.scaled(dec!(-2)).unwrap();
        assert_eq!(a, b);
        assert!(a.is_parallel_to(&b));
        assert_eq!(a.first_nonzero_index(), Ok(0));

        let shifted = Equation::new(vec2(dec!(300000000000000), dec!(1)), dec!(1000000));
        assert_ne!(a, shifted);
        assert_ne!(shifted, a);
    }

    #[test]
    fn mixed_tolerances() {
        let coarse = Tolerance::DEFAULT.with_epsilon(dec!(0.001));
        let a = Equation::with_tolerance(vec3(dec!(0), dec!(1), dec!(1)), dec!(2), coarse);
        let b = Equation::new(vec3(dec!(0.0001), dec!(1), dec!(1)), dec!(2));

        // under `coarse` alone the normals would be parallel
        assert!(a.normal().is_parallel_to_with(b.normal(), coarse));
        assert!(!a.is_parallel_to(&b));
        assert!(!b.is_parallel_to(&a));
        assert_ne!(a, b);
        assert_ne!(b, a);

        let c = Equation::new(vec3(dec!(0), dec!(-3), dec!(-3)), dec!(-6));
        assert_eq!(a, c);
        assert_eq!(c, a);
    }

    #[test]
    fn display() {
        let eq = Equation::new(vec3(dec!(1), dec!(-1), dec!(2.5)), dec!(4));
        assert_eq!(eq.to_string(), "x_1 - x_2 + 2.500x_3 = 4");

        let eq = Equation::new(vec3(dec!(0), dec!(-1), dec!(0.0001)), dec!(-2.0005));
        assert_eq!(eq.to_string(), "-x_2 = -2");

        let eq = Equation::new(vec3(dec!(-3), dec!(0.1235), dec!(2)), dec!(0.00000000001));
        assert_eq!(eq.to_string(), "-3x_1 + 0.124x_2 + 2x_3 = 0");

        let eq = Equation::new(vec2(dec!(5.862), dec!(1.0004)), dec!(-8.15));
        assert_eq!(eq.to_string(), "5.862x_1 + x_2 = -8.150");

        assert_eq!(Equation::zero(3).to_string(), "0 = 0");
        assert_eq!(Equation::new(Vector::zero(2), dec!(1)).to_string(), "0 = 1");
    }

    #[test]
    fn display_rounding() {
        // Half-even rounding, and no negative zero.
        assert_eq!(round_for_display(dec!(0.0125)).to_string(), "0.012");
        assert_eq!(round_for_display(dec!(0.0135)).to_string(), "0.014");
        assert_eq!(round_for_display(dec!(-0.0004)).to_string(), "0");
        assert_eq!(round_for_display(dec!(2.0000)).to_string(), "2");
        assert_eq!(round_for_display(dec!(-7.9999)).to_string(), "-8");
        assert_eq!(round_for_display(dec!(0.5)).to_string(), "0.500");
    }
}
