//! Environment-based configuration.
//!
//! See the crate-level docs for the list of recognized variables.

use std::env::{self, VarError};

use anyhow::{bail, Context};
use linsys_linalg::{Decimal, Tolerance};

pub const EPSILON_VAR: &str = "LINSYS_EPSILON";
pub const PLACES_VAR: &str = "LINSYS_PLACES";

/// Builds a [`Tolerance`] from the `LINSYS_EPSILON` and `LINSYS_PLACES` environment variables.
///
/// Unset variables keep the value from [`Tolerance::DEFAULT`]. Variables that are set to an
/// invalid value result in an error.
pub fn tolerance_from_env() -> anyhow::Result<Tolerance> {
    tolerance_from_lookup(|name| match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => bail!(
            "invalid value set for `{name}` variable: '{}'",
            value.to_string_lossy()
        ),
    })
}

fn tolerance_from_lookup<F>(lookup: F) -> anyhow::Result<Tolerance>
where
    F: Fn(&str) -> anyhow::Result<Option<String>>,
{
    let mut tolerance = Tolerance::DEFAULT;

    if let Some(value) = lookup(EPSILON_VAR)? {
        let value = value.trim();
        let epsilon = value
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(value))
            .with_context(|| format!("invalid value set for `{EPSILON_VAR}` variable: '{value}'"))?;
        if epsilon <= Decimal::ZERO {
            bail!("`{EPSILON_VAR}` must be positive, got '{value}'");
        }
        tolerance = tolerance.with_epsilon(epsilon);
    }

    if let Some(value) = lookup(PLACES_VAR)? {
        let places = value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("invalid value set for `{PLACES_VAR}` variable: '{value}'"))?;
        if places > Tolerance::MAX_PLACES {
            bail!(
                "`{PLACES_VAR}` must be at most {}, got {places}",
                Tolerance::MAX_PLACES
            );
        }
        tolerance = tolerance.with_places(places);
    }

    log::debug!("using {:?}", tolerance);
    Ok(tolerance)
}
