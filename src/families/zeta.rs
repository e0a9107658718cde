// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Riemann Zeta** - *ζ(s) from s = -25 to 35*

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::{tenths, End};

#[derive(Debug, Clone, Copy, Default)]
pub struct Zeta;

impl FunctionFamily for Zeta {
    type Point = f64;
    type Params = ();

    const NAME: &'static str = "special_zeta";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "Riemann zeta function"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(&self, _: &(), _: &mut R) -> Result<Vec<f64>, ReferenceError> {
        // The pole at s = 1 is the only excluded point.
        let fine = tenths(-250, End::Exclusive(150), 2).filter(|&s| s != 1.0);
        let coarse = tenths(150, End::Inclusive(350), 5);
        Ok(fine.chain(coarse).collect())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &s: &f64) -> Record {
        Record::new()
            .with("s", s)
            .with_real("zeta", &oracle.zeta(s), Bound::Unbounded)
    }
}
