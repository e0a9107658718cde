// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **frexp** - *Binary decomposition of ±e^k*
//!
//! A seeded set of 50 exponents `k` in `[-800, 709]`, always including -715 (deep
//! in the subnormal range) and 709 (the largest finite `e^k`), visited in ascending
//! order. Each value is `e^k` with a seeded sign. Below about `k = -745` the value
//! underflows to a signed zero, which decomposes to `(±0, 0)`.

use crate::config::{FREXP_EXPONENT_RANGE, FREXP_REQUIRED_EXPONENTS, FREXP_TARGET_POINTS};
use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::Record;
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::exponent_set;

/// Seed of the single run.
pub const SEED: u64 = 19;

#[derive(Debug, Clone, Copy, Default)]
pub struct Frexp;

impl FunctionFamily for Frexp {
    type Point = f64;
    type Params = ();

    const NAME: &'static str = "utils_frexp";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "frexp mantissa and exponent of signed exponentials"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), SEED)]
    }

    /// Exponents are all drawn before any sign, so the exponent set does not
    /// depend on how many coin flips follow.
    fn select<R: RandomSequence>(&self, _: &(), rng: &mut R) -> Result<Vec<f64>, ReferenceError> {
        let exponents = exponent_set(
            FREXP_EXPONENT_RANGE,
            &FREXP_REQUIRED_EXPONENTS,
            FREXP_TARGET_POINTS,
            rng,
        );
        Ok(exponents
            .into_iter()
            .map(|k| {
                let v = libm::exp(k as f64);
                if rng.uniform_f64(0.0, 1.0) < 0.5 {
                    -v
                } else {
                    v
                }
            })
            .collect())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &value: &f64) -> Record {
        let (mantissa, exponent) = oracle.frexp(value);
        Record::new()
            .with("value", value)
            .with("mantissa", mantissa)
            .with("exponent", exponent)
    }
}
