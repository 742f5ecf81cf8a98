//! Exact-decimal vectors for linsys.
//!
//! # Motivation
//!
//! Gaussian elimination chains many row operations together. With binary floating point, the
//! rounding error of every step accumulates and near-zero pivots become indistinguishable from
//! real ones. This library stores all coordinates as [`Decimal`]s instead, so sums and products
//! are exact and only divisions round (at the 28th significant digit).
//!
//! # Goals & Non-Goals
//!
//! - Vectors are dynamically sized, since equations of different dimensions meet at runtime and
//!   have to be rejected with an error rather than a type mismatch. The dimension of a [`Vector`]
//!   is fixed once it is created, and is always at least 1.
//! - There is no global precision setting. Every near-zero and equality-of-ratio check takes an
//!   explicit [`Tolerance`]; the methods without a `_with` suffix use [`Tolerance::DEFAULT`].
//! - Vectors are values: arithmetic always produces a new [`Vector`], there are no in-place
//!   operators.
//! - Only a single element type ([`Decimal`]) is supported.
//!
//! [`Decimal`]: rust_decimal::Decimal

pub mod approx;
mod error;
mod tolerance;
mod vector;

pub use error::*;
pub use tolerance::*;
pub use vector::*;

pub use rust_decimal::Decimal;
