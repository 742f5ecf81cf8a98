//! Systems of linear equations and Gaussian elimination.

use std::{fmt, ops::Index, slice};

use itertools::Itertools;
use linsys_linalg::{Decimal, Tolerance, Vector};

use crate::{Equation, Error, Result};

/// Determines what [`LinearSystem::compute_triangular_form`] does when a column has no usable
/// pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotPolicy {
    /// Leave the row untouched, skip the column, and record the [`DegeneratePivot`] in the
    /// returned [`Reduction`].
    #[default]
    Skip,
    /// Abort with [`Error::DegeneratePivot`].
    Fail,
}

/// A row whose pivot column had a zero coefficient in every remaining row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegeneratePivot {
    pub row: usize,
    pub column: usize,
}

/// Summary of an elimination pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reduction {
    /// Index of the first row with an all-zero normal vector.
    ///
    /// Elimination stops at this row, so rows after it are left as they were.
    pub stopped_at: Option<usize>,
    /// Pivots that were skipped under [`PivotPolicy::Skip`], in row order.
    pub degenerate: Vec<DegeneratePivot>,
}

impl Reduction {
    fn is_degenerate(&self, row: usize) -> bool {
        self.degenerate.iter().any(|pivot| pivot.row == row)
    }
}

/// The solution set of a system in reduced row-echelon form.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// The system has exactly one solution.
    Unique(Vector),
    /// The equations contradict each other.
    NoSolution,
    /// The system has infinitely many solutions, parameterized by the variables at `free`.
    Infinite { free: Vec<usize> },
}

/// An ordered list of [`Equation`]s that all live in the same dimension.
///
/// Rows are only ever modified through the row operations ([`LinearSystem::swap_rows`],
/// [`LinearSystem::scale_row`], [`LinearSystem::add_scaled_row`]) or replaced through
/// [`LinearSystem::replace_row`], so the shared dimension can never be violated.
///
/// # Examples
///
/// ```
/// # use linsys::*;
/// # use rust_decimal_macros::dec;
/// let system = LinearSystem::new([
///     Plane::new(vec3(dec!(0), dec!(1), dec!(1)), dec!(1))?,
///     Plane::new(vec3(dec!(1), dec!(-1), dec!(1)), dec!(2))?,
///     Plane::new(vec3(dec!(1), dec!(2), dec!(-5)), dec!(3))?,
/// ])?;
///
/// let Solution::Unique(point) = system.solve()? else { unreachable!() };
/// let expected = vec3(dec!(23) / dec!(9), dec!(7) / dec!(9), dec!(2) / dec!(9));
/// assert_approx_eq!(point, expected);
/// # Ok::<_, linsys::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinearSystem {
    equations: Vec<Equation>,
    dimension: usize,
    tolerance: Tolerance,
    pivot_policy: PivotPolicy,
}

impl LinearSystem {
    /// Creates a system using the default [`Tolerance`].
    pub fn new<I>(equations: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Equation>,
    {
        Self::with_tolerance(equations, Tolerance::DEFAULT)
    }

    /// Creates a system whose equations all use `tolerance`.
    ///
    /// Returns [`Error::EmptySystem`] if `equations` is empty, and [`Error::DimensionMismatch`]
    /// if the equations don't all have the same dimension as the first one.
    pub fn with_tolerance<I>(equations: I, tolerance: Tolerance) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Equation>,
    {
        let equations = equations
            .into_iter()
            .map(|eq| Into::<Equation>::into(eq).retag(tolerance))
            .collect::<Vec<_>>();
        let dimension = equations.first().ok_or(Error::EmptySystem)?.dimension();
        if let Some(eq) = equations.iter().find(|eq| eq.dimension() != dimension) {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                found: eq.dimension(),
            });
        }

        Ok(Self {
            equations,
            dimension,
            tolerance,
            pivot_policy: PivotPolicy::default(),
        })
    }

    pub fn with_pivot_policy(self, pivot_policy: PivotPolicy) -> Self {
        Self {
            pivot_policy,
            ..self
        }
    }

    /// Returns the number of equations in the system.
    #[inline]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Always `false`, since systems can not be created without equations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns the dimension shared by all equations.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    #[inline]
    pub fn pivot_policy(&self) -> PivotPolicy {
        self.pivot_policy
    }

    #[inline]
    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Equation> {
        self.equations.iter()
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::RowOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Replaces the equation at `index`.
    ///
    /// The new equation has to have the same dimension as the system, and will use the system's
    /// tolerance.
    pub fn replace_row(&mut self, index: usize, equation: Equation) -> Result<()> {
        self.check_row(index)?;
        if equation.dimension() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                found: equation.dimension(),
            });
        }

        self.equations[index] = equation.retag(self.tolerance);
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        log::trace!("swap rows {a} and {b}");
        self.equations.swap(a, b);
        Ok(())
    }

    /// Multiplies the equation at `row` by `coefficient`.
    ///
    /// # Errors
    ///
    /// Fails if `row` is out of bounds or if a product overflows, leaving the row unchanged.
    pub fn scale_row(&mut self, row: usize, coefficient: Decimal) -> Result<()> {
        self.check_row(row)?;
        log::trace!("scale row {row} by {coefficient}");
        let scaled = self.equations[row].scaled(coefficient)?;
        self.replace_row(row, scaled)
    }

    /// Adds `coefficient` times the equation at `source` to the equation at `target`.
    ///
    /// # Errors
    ///
    /// Fails if a row is out of bounds or if the arithmetic overflows, leaving `target`
    /// unchanged.
    pub fn add_scaled_row(
        &mut self,
        coefficient: Decimal,
        source: usize,
        target: usize,
    ) -> Result<()> {
        self.check_row(source)?;
        self.check_row(target)?;
        log::trace!("add {coefficient} times row {source} to row {target}");
        let sum = self.equations[target].plus_scaled(&self.equations[source], coefficient)?;
        self.replace_row(target, sum)
    }

    /// Returns the index of the first nonzero coefficient of every row.
    ///
    /// Rows without any nonzero coefficient yield `None`.
    pub fn pivot_indices(&self) -> Vec<Option<usize>> {
        self.iter().map(|eq| eq.first_nonzero_index().ok()).collect()
    }

    fn pivot_column(&self, row: usize) -> usize {
        row.min(self.dimension - 1)
    }

    /// Brings the system into triangular form.
    ///
    /// Row `r` gets its pivot in column `min(r, dimension - 1)`, scaled to 1, and that column is
    /// eliminated from every row below it. If the pivot coefficient is zero, the first row below
    /// with a nonzero coefficient in that column is swapped in. If there is none, the
    /// [`PivotPolicy`] decides how to proceed.
    ///
    /// Elimination stops at the first row whose normal vector is zero.
    pub fn compute_triangular_form(&mut self) -> Result<Reduction> {
        let tol = self.tolerance;
        let mut reduction = Reduction::default();

        for row in 0..self.len() {
            if self[row].normal().is_zero_with(tol) {
                log::debug!("row {row} has no nonzero coefficients, stopping elimination");
                reduction.stopped_at = Some(row);
                break;
            }

            let column = self.pivot_column(row);
            if tol.is_near_zero(self[row].coefficient(column)) {
                let candidate = (row + 1..self.len())
                    .find(|&other| !tol.is_near_zero(self[other].coefficient(column)));
                match (candidate, self.pivot_policy) {
                    (Some(other), _) => {
                        log::debug!("swapping rows {row} and {other} to pivot on column {column}");
                        self.swap_rows(row, other)?;
                    }
                    (None, PivotPolicy::Fail) => {
                        return Err(Error::DegeneratePivot { row, column });
                    }
                    (None, PivotPolicy::Skip) => {
                        log::debug!("no pivot for column {column} at or below row {row}, skipping");
                        reduction.degenerate.push(DegeneratePivot { row, column });
                        continue;
                    }
                }
            }

            // `pivot` is at least `Tolerance::MIN_EPSILON`, so its reciprocal fits
            let pivot = self[row].coefficient(column);
            self.scale_row(row, Decimal::ONE / pivot)?;

            for other in row + 1..self.len() {
                let coefficient = self[other].coefficient(column);
                if !tol.is_near_zero(coefficient) {
                    self.add_scaled_row(-coefficient, row, other)?;
                }
            }
        }

        Ok(reduction)
    }

    /// Brings the system into reduced row-echelon form.
    ///
    /// After triangularization, every pivot column is eliminated from the rows above its pivot,
    /// starting at the last row. Rows past [`Reduction::stopped_at`] and rows with a degenerate
    /// pivot never had their pivot scaled to 1, so they are not used for back-substitution.
    pub fn compute_rref(&mut self) -> Result<Reduction> {
        let reduction = self.compute_triangular_form()?;
        let tol = self.tolerance;
        let end = reduction.stopped_at.unwrap_or(self.len());

        for row in (1..end).rev() {
            if reduction.is_degenerate(row) || self[row].normal().is_zero_with(tol) {
                continue;
            }

            let column = self.pivot_column(row);
            for above in 0..row {
                let coefficient = self[above].coefficient(column);
                if !tol.is_near_zero(coefficient) {
                    self.add_scaled_row(-coefficient, row, above)?;
                }
            }
        }

        Ok(reduction)
    }

    /// Reads the solution set off a system in reduced row-echelon form.
    ///
    /// Call [`LinearSystem::compute_rref`] first (or use [`LinearSystem::solve`]), the result is
    /// meaningless for other systems.
    pub fn solution(&self) -> Solution {
        if self.iter().any(Equation::is_inconsistent) {
            return Solution::NoSolution;
        }

        let pivots = self.pivot_indices();
        let free = (0..self.dimension)
            .filter(|column| !pivots.contains(&Some(*column)))
            .collect::<Vec<_>>();
        if !free.is_empty() {
            return Solution::Infinite { free };
        }

        let point = Vector::from_fn(self.dimension, |column| {
            self.iter()
                .zip(&pivots)
                .find(|(_, pivot)| **pivot == Some(column))
                .map_or(Decimal::ZERO, |(eq, _)| eq.constant() / eq.coefficient(column))
        });
        Solution::Unique(point)
    }

    /// Reduces the system and returns its solution set.
    ///
    /// Elimination stops at the first row without nonzero coefficients, which can leave rows below
    /// it unreduced. In that case the zero rows are moved to the bottom and the system is reduced
    /// again.
    pub fn solve(mut self) -> Result<Solution> {
        let tol = self.tolerance;
        loop {
            let reduction = self.compute_rref()?;
            let Some(stopped_at) = reduction.stopped_at else {
                break;
            };
            if self.equations[stopped_at..]
                .iter()
                .all(|eq| eq.normal().is_zero_with(tol))
            {
                break;
            }

            log::debug!("moving rows without nonzero coefficients to the bottom");
            self.equations.sort_by_key(|eq| eq.normal().is_zero_with(tol));
        }

        let solution = self.solution();
        log::debug!("{self}\n=> {solution:?}");
        Ok(solution)
    }
}

impl Index<usize> for LinearSystem {
    type Output = Equation;

    #[inline]
    fn index(&self, index: usize) -> &Equation {
        &self.equations[index]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Equation;
    type IntoIter = slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formats the system as one line per equation.
///
/// ```text
/// Linear System:
/// Equation 1: x_1 + x_2 + x_3 = 1
/// Equation 2: x_2 + x_3 = 2
/// ```
impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Linear System:\n{}",
            self.iter().enumerate().format_with("\n", |(i, eq), f| {
                f(&format_args!("Equation {}: {}", i + 1, eq))
            })
        )
    }
}
