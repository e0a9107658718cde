// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Complete Beta** - *B(a, b) on a square geometric grid*

use std::f64::consts::SQRT_2;

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::geometric;

/// First grid value of both shapes.
const START: f64 = 1e-5;

/// Both shapes stay below this.
const LIMIT: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Beta;

impl FunctionFamily for Beta {
    type Point = (f64, f64);
    type Params = ();

    const NAME: &'static str = "special_beta";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "complete beta function B(a, b)"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(
        &self,
        _: &(),
        _: &mut R,
    ) -> Result<Vec<(f64, f64)>, ReferenceError> {
        Ok(geometric(START, SQRT_2, LIMIT)
            .flat_map(|a| geometric(START, SQRT_2, LIMIT).map(move |b| (a, b)))
            .collect())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &(a, b): &(f64, f64)) -> Record {
        Record::new()
            .with("a", a)
            .with("b", b)
            .with_real("beta", &oracle.beta(a, b), Bound::Unbounded)
    }
}
