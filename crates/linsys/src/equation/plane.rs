use linsys_linalg::{Decimal, Vector};

use super::Equation;

fixed_dimension_equation!(
    /// A plane in 3D space, described by `a·x + b·y + c·z = k`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::*;
    /// # use rust_decimal_macros::dec;
    /// let plane = Plane::new(vec3(dec!(-0.412), dec!(3.806), dec!(0.728)), dec!(-3.46))?;
    /// let same = Plane::new(vec3(dec!(1.03), dec!(-9.515), dec!(-1.82)), dec!(8.65))?;
    /// assert_eq!(plane, same);
    /// # Ok::<_, linsys::Error>(())
    /// ```
    Plane, 3
);
