use linsys_linalg::{vec2, Decimal, Tolerance, Vector};

use super::Equation;

fixed_dimension_equation!(
    /// A line in the plane, described by `a·x + b·y = k`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::*;
    /// # use rust_decimal_macros::dec;
    /// let line = Line::new(vec2(dec!(2), dec!(-1)), dec!(3))?;
    /// assert_eq!(line.to_string(), "2x_1 - x_2 = 3");
    /// assert_eq!(line.basepoint(), Some(&vec2(dec!(1.5), dec!(0))));
    ///
    /// assert!(Line::new(vec3(dec!(1), dec!(1), dec!(1)), dec!(0)).is_err());
    /// # Ok::<_, linsys::Error>(())
    /// ```
    Line, 2
);

/// Result of intersecting two [`Line`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The lines cross in exactly one point.
    Point(Vector),
    /// The lines are parallel and never meet.
    Parallel,
    /// Both lines are the same line.
    Coincident,
}

impl Line {
    /// Computes the intersection of `self` and `other`.
    ///
    /// Both lines are rescaled to unit normals before Cramer's rule is applied, so that the
    /// determinant stays within `[-1, 1]` regardless of the size of the coefficients.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate of the intersection point lies outside the range of [`Decimal`].
    pub fn intersect(&self, other: &Line) -> Intersection {
        if self.is_parallel_to(other) {
            return if self.coincides_with(other) {
                log::debug!("lines `{self}` and `{other}` are coincident");
                Intersection::Coincident
            } else {
                log::debug!("lines `{self}` and `{other}` are parallel, not incidental");
                Intersection::Parallel
            };
        }

        let tol = self.tolerance().strictest(other.tolerance());
        let (Some((a, b, k1)), Some((c, d, k2))) = (unit_form(self, tol), unit_form(other, tol))
        else {
            // a zero normal is parallel to everything, so this is unreachable
            return Intersection::Parallel;
        };
        let determinant = a * d - b * c;
        if tol.is_near_zero(determinant) {
            log::debug!("lines `{self}` and `{other}` have a vanishing determinant");
            return Intersection::Parallel;
        }

        let x = (d * k1 - b * k2) / determinant;
        let y = (-c * k1 + a * k2) / determinant;
        Intersection::Point(vec2(x, y))
    }
}

/// Returns the coefficients and constant of `line` divided by the length of its normal.
fn unit_form(line: &Line, tol: Tolerance) -> Option<(Decimal, Decimal, Decimal)> {
    let unit = line.normal().normalize_with(tol).ok()?;
    let constant = line.constant() / line.normal().magnitude();
    Some((unit[0], unit[1], constant))
}
