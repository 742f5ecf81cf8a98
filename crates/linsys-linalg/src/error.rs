use thiserror::Error;

/// Errors produced by [`Vector`][crate::Vector] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// Attempted to create a vector without any coordinates.
    #[error("the coordinates must be nonempty")]
    Empty,

    /// The operation is undefined for the zero vector (eg. normalization, angles).
    #[error("cannot perform this operation on the zero vector")]
    ZeroVector,

    /// Every coordinate of the vector is zero (within tolerance).
    #[error("no nonzero elements found")]
    NoNonzeroElements,

    /// The operation only exists for some dimensions.
    #[error("{operation} is not defined for {dimension}-dimensional vectors")]
    UnsupportedDimension {
        /// Name of the attempted operation.
        operation: &'static str,
        /// Dimension of the offending operand.
        dimension: usize,
    },

    /// An intermediate result exceeded the range of [`Decimal`][rust_decimal::Decimal].
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// Name of the attempted operation.
        operation: &'static str,
    },

    /// A value could not be converted to or from a [`Decimal`][rust_decimal::Decimal].
    #[error("value `{value}` is not representable")]
    NotRepresentable {
        /// The rejected value, formatted.
        value: String,
    },
}
