use rust_decimal::Decimal;

/// Thresholds used by near-zero and equality-of-ratio checks.
///
/// - `epsilon`: values whose absolute value is below this are treated as zero. This applies to
///   coordinates, pivots, constants and vector magnitudes.
/// - `places`: ratios (for parallelism) and inner products (for orthogonality) are rounded to this
///   many decimal places before they are compared, which keeps those checks robust against the
///   rounding of earlier divisions.
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// # use rust_decimal_macros::dec;
/// let tol = Tolerance::DEFAULT.with_places(2);
/// assert_eq!(tol.epsilon(), dec!(0.0000000001));
/// assert_eq!(tol.places(), 2);
/// assert!(tol.is_near_zero(dec!(-0.00000000001)));
/// assert!(!tol.is_near_zero(dec!(0.0000000001)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tolerance {
    epsilon: Decimal,
    places: u32,
}

impl Tolerance {
    /// `epsilon = 1e-10`, `places = 3`.
    pub const DEFAULT: Self = Self {
        epsilon: Decimal::from_parts(1, 0, 0, false, 10),
        places: 3,
    };

    /// The largest number of decimal places a [`Decimal`] can carry.
    pub const MAX_PLACES: u32 = 28;

    /// The smallest positive [`Decimal`], `1e-28`.
    pub const MIN_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

    /// Returns a copy of `self` with a different near-zero threshold.
    ///
    /// Only the magnitude of `epsilon` is used. It is raised to at least
    /// [`Tolerance::MIN_EPSILON`], so that exact zeroes always count as zero.
    pub fn with_epsilon(self, epsilon: Decimal) -> Self {
        Self {
            epsilon: epsilon.abs().max(Self::MIN_EPSILON),
            ..self
        }
    }

    /// Returns a copy of `self` rounding ratios to `places` decimal places.
    ///
    /// Values above [`Tolerance::MAX_PLACES`] are clamped.
    pub fn with_places(self, places: u32) -> Self {
        Self {
            places: places.min(Self::MAX_PLACES),
            ..self
        }
    }

    #[inline]
    pub fn epsilon(&self) -> Decimal {
        self.epsilon
    }

    #[inline]
    pub fn places(&self) -> u32 {
        self.places
    }

    /// Combines two tolerances into the stricter one: the smaller `epsilon` and the larger number
    /// of `places`.
    ///
    /// Comparisons between values carrying their own tolerances use this, so that they do not
    /// depend on the order of the operands.
    pub fn strictest(self, other: Self) -> Self {
        Self {
            epsilon: self.epsilon.min(other.epsilon),
            places: self.places.max(other.places),
        }
    }

    /// Returns whether `value` is zero within this tolerance.
    #[inline]
    pub fn is_near_zero(&self, value: Decimal) -> bool {
        value.abs() < self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
