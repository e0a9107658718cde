// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Function** - *Γ(z) and ln|Γ(z)| in tenths*
//!
//! Three sweeps of decreasing density:
//! - `-5.0 ≤ z < 15.0` in steps of 0.2, poles skipped, with Γ and ln|Γ|
//! - `15.0 ≤ z < 25.0` in steps of 0.5, ln|Γ| only
//! - `25.0 ≤ z ≤ 50.0` in steps of 1.2, ln|Γ| only

use crate::config::GAMMA_LINEAR_LIMIT;
use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::{is_non_positive_integer, tenths, End};

#[derive(Debug, Clone, Copy, Default)]
pub struct Gamma;

impl FunctionFamily for Gamma {
    type Point = f64;
    type Params = ();

    const NAME: &'static str = "special_gamma";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "gamma function and its log magnitude"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(&self, _: &(), _: &mut R) -> Result<Vec<f64>, ReferenceError> {
        let linear = tenths(-50, End::Exclusive(150), 2).filter(|&z| !is_non_positive_integer(z));
        let moderate = tenths(150, End::Exclusive(250), 5);
        let large = tenths(250, End::Inclusive(500), 12);
        Ok(linear.chain(moderate).chain(large).collect())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &z: &f64) -> Record {
        let mut record = Record::new().with("z", z).with_real(
            "gamma.log",
            &oracle.ln_gamma(z),
            Bound::Unbounded,
        );
        if z < GAMMA_LINEAR_LIMIT {
            record = record.with_real("gamma", &oracle.gamma(z), Bound::Unbounded);
        }
        record
    }
}
