// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment. Changing any of them changes
// the emitted reference files, so regenerate every family afterwards.

//! # **Configuration Constants** - *Sweep and Precision Parameters*
//!
//! Compile-time constants controlling the working precision of the oracle and the
//! shape of each point selection strategy, plus the runtime [`RunConfig`]
//! assembled from command-line flags.

use rug::float::{prec_max, prec_min};

use crate::errors::ReferenceError;

/// Default working precision of the oracle, in bits.
///
/// 334 bits carries 100 significant decimal digits, which leaves well over 200 bits
/// of headroom above the double-precision output for cancellation inside the
/// continued fractions and series.
pub const WORKING_PRECISION_BITS: u32 = 334;

/// Largest binomial trial count that is enumerated exhaustively.
///
/// Above this the outcome domain is sampled with [`STRATIFIED_TARGET_POINTS`] points.
pub const EXHAUSTIVE_DOMAIN_LIMIT: u64 = 100;

/// Exact cardinality of a stratified large-domain point set.
pub const STRATIFIED_TARGET_POINTS: usize = 50;

/// Number of seeded random points appended to a location/scale grid.
pub const LOCATION_SCALE_RANDOM_POINTS: usize = 10;

/// Half width, in scale units, of the window the random location/scale points are drawn from.
pub const LOCATION_SCALE_RANDOM_HALF_WIDTH: f64 = 8.0;

/// Standardised offsets of the location/scale grid: `-2.0, -1.875, ..., 2.0`.
pub const LOCATION_SCALE_GRID: (f64, f64, f64) = (-2.0, 2.0, 0.125);

/// Number of distinct exponents drawn for the frexp decomposition sweep.
pub const FREXP_TARGET_POINTS: usize = 50;

/// Inclusive exponent range of the frexp sweep.
///
/// The low end reaches past the subnormal range so the decomposition of zero is covered.
pub const FREXP_EXPONENT_RANGE: (i32, i32) = (-800, 709);

/// Exponents always present in the frexp sweep: deep subnormal and the largest finite `exp`.
pub const FREXP_REQUIRED_EXPONENTS: [i32; 2] = [-715, 709];

/// Un-normalised incomplete gamma values are only emitted while `ln Γ(a)` stays below this.
pub const LN_GAMMA_OVERFLOW_LIMIT: f64 = 700.0;

/// Linear `Γ(z)` is only emitted below this argument; above it only `ln Γ(z)` is.
pub const GAMMA_LINEAR_LIMIT: f64 = 15.0;

/// Upper bound on iterations of any continued fraction or series in the oracle.
///
/// Convergence is normally reached in a few hundred steps at the default precision;
/// the bound only protects against a non-converging input.
pub const MAX_ORACLE_ITERATIONS: usize = 200_000;

/// Runtime settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Working precision of the oracle in bits.
    pub precision: u32,
    /// Pretty-print the emitted JSON document.
    pub pretty: bool,
}

impl RunConfig {
    /// Validates `precision` against the limits MPFR supports.
    ///
    /// Anything below double precision would make the reference data worse than the
    /// library under test, so 53 bits is the effective lower bound. See [`check_precision`].
    pub fn new(precision: u32, pretty: bool) -> Result<Self, ReferenceError> {
        let precision = check_precision(precision)?;
        Ok(RunConfig { precision, pretty })
    }
}

/// Returns `bits` unchanged if MPFR supports it and it is at least double precision.
#[inline]
pub fn check_precision(bits: u32) -> Result<u32, ReferenceError> {
    let lower = prec_min().max(53);
    if bits < lower || bits > prec_max() {
        return Err(ReferenceError::InvalidPrecision {
            bits,
            min: lower,
            max: prec_max(),
        });
    }
    Ok(bits)
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            precision: WORKING_PRECISION_BITS,
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_precision_is_accepted() {
        let cfg = RunConfig::new(WORKING_PRECISION_BITS, false).unwrap();
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn precision_below_double_is_rejected() {
        assert!(matches!(
            RunConfig::new(24, false),
            Err(ReferenceError::InvalidPrecision { bits: 24, .. })
        ));
    }
}
