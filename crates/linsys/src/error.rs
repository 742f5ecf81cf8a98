use linsys_linalg::LinalgError;
use thiserror::Error;

/// Errors returned by equations and linear systems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// An equation does not live in the dimension its container requires.
    #[error("equation has dimension {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("a linear system needs at least one equation")]
    EmptySystem,

    #[error("row {index} is out of bounds for a system of {len} equations")]
    RowOutOfBounds { index: usize, len: usize },

    /// No row at or below `row` has a usable pivot in `column`.
    ///
    /// Only returned when the system uses [`PivotPolicy::Fail`][crate::PivotPolicy::Fail].
    #[error("no usable pivot in column {column} at or below row {row}")]
    DegeneratePivot { row: usize, column: usize },
}

impl Error {
    /// Returns whether this error was caused by a normal vector whose coordinates are all zero.
    pub fn is_no_nonzero_elements(&self) -> bool {
        matches!(self, Self::Linalg(LinalgError::NoNonzeroElements))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert!(Error::from(LinalgError::NoNonzeroElements).is_no_nonzero_elements());
        assert!(!Error::from(LinalgError::ZeroVector).is_no_nonzero_elements());
        assert!(!Error::EmptySystem.is_no_nonzero_elements());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::from(LinalgError::NoNonzeroElements).to_string(),
            "no nonzero elements found",
        );
        assert_eq!(
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
            .to_string(),
            "equation has dimension 2, expected 3",
        );
    }
}
