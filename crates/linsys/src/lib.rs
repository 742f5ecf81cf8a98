//! Linear equations and Gaussian elimination over exact decimals.
//!
//! This crate builds on the [`Vector`] type from `linsys-linalg` and provides:
//!
//! - [`Equation`]: a linear equation `normal · x = constant` in any dimension, with the typed
//!   wrappers [`Line`] (2D) and [`Plane`] (3D).
//! - [`LinearSystem`]: an ordered list of equations supporting row operations, triangular form,
//!   reduced row-echelon form, and extraction of the [`Solution`] set.
//!
//! All arithmetic uses [`Decimal`], so coefficients like `0.1` are represented exactly. Divisions
//! round to 28 significant digits, which is why near-zero checks go through a [`Tolerance`].
//!
//! # Environment Variables
//!
//! [`config::tolerance_from_env`] reads the following variables:
//!
//! * `LINSYS_EPSILON`: Values whose absolute value is below this threshold are treated as zero.
//!   Accepts plain (`0.000001`) and scientific (`1e-6`) notation. Must be positive. Defaults to
//!   `1e-10`.
//! * `LINSYS_PLACES`: Number of decimal places that ratios and inner products are rounded to in
//!   parallelism and orthogonality checks. Must be between 0 and 28. Defaults to 3.
//!
//! The log output of [`init_logger!`] can be configured with `RUST_LOG`, as usual for
//! [`env_logger`].

use log::LevelFilter;

pub mod config;
pub mod equation;
mod error;
pub mod system;

pub use equation::{Equation, Intersection, Line, Plane};
pub use error::*;
pub use system::{DegeneratePivot, LinearSystem, PivotPolicy, Reduction, Solution};

pub use linsys_linalg::{
    assert_approx_eq, assert_approx_ne, vec2, vec3, AngleUnit, Decimal, LinalgError, Tolerance,
    Vector,
};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `linsys` will log at *debug* level. Row operations are logged at *trace*
/// level, and can be enabled with `RUST_LOG=linsys=trace`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
