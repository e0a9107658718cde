// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Incomplete Beta** - *Both tails, normalised and not, over (a, b, x)*
//!
//! `a` and `b` grow at different ratios so the grid is not symmetric in the shapes
//! and covers strongly skewed pairs in both directions.

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::geometric;

const SHAPE_START: f64 = 1e-2;
const SHAPE_LIMIT: f64 = 1000.0;
const A_RATIO: f64 = 3.0;
const X_START: f64 = 1e-3;

#[derive(Debug, Clone, Copy, Default)]
pub struct BetaIncomplete;

impl FunctionFamily for BetaIncomplete {
    type Point = (f64, f64, f64);
    type Params = ();

    const NAME: &'static str = "special_beta_incomplete";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "incomplete beta B_x(a, b), its complement and both regularised forms"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(
        &self,
        _: &(),
        _: &mut R,
    ) -> Result<Vec<(f64, f64, f64)>, ReferenceError> {
        let b_ratio = 3.0_f64.sqrt();
        let x_ratio = 2.0_f64.sqrt().sqrt();
        let mut points = Vec::new();
        for a in geometric(SHAPE_START, A_RATIO, SHAPE_LIMIT) {
            for b in geometric(SHAPE_START, b_ratio, SHAPE_LIMIT) {
                points.extend(geometric(X_START, x_ratio, 1.0).map(|x| (a, b, x)));
            }
        }
        Ok(points)
    }

    fn build(
        &self,
        oracle: &dyn HighPrecisionOracle,
        _: &(),
        &(a, b, x): &(f64, f64, f64),
    ) -> Record {
        let ib = oracle.beta_incomplete(a, b, x);
        let reg = ib.regularised();
        Record::new()
            .with("a", a)
            .with("b", b)
            .with("x", x)
            .with_value_and_log("beta.lower", &ib.lower, Bound::Unbounded)
            .with_value_and_log("beta.upper", &ib.upper, Bound::Unbounded)
            .with_value_and_log("beta.lower.norm", &reg.lower, Bound::Probability)
            .with_value_and_log("beta.upper.norm", &reg.upper, Bound::Probability)
    }
}
