// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Incomplete Gamma Derivative** - *∂P(a, x)/∂x on the incomplete gamma grid*

use crate::errors::ReferenceError;
use crate::families::gamma_incomplete::shape_argument_grid;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;

#[derive(Debug, Clone, Copy, Default)]
pub struct GammaDerivative;

impl FunctionFamily for GammaDerivative {
    type Point = (f64, f64);
    type Params = ();

    const NAME: &'static str = "special_gamma_derivative";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "derivative of the regularised lower incomplete gamma in x"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(
        &self,
        _: &(),
        _: &mut R,
    ) -> Result<Vec<(f64, f64)>, ReferenceError> {
        Ok(shape_argument_grid())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &(a, x): &(f64, f64)) -> Record {
        Record::new().with("a", a).with("x", x).with_real(
            "gamma.lower.norm.derivative",
            &oracle.gamma_p_derivative(a, x),
            Bound::Unbounded,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MpfrOracle;

    #[test]
    fn exponential_shape() {
        // a = 1: derivative is e^-x
        let oracle = MpfrOracle::default();
        let r = GammaDerivative.build(&oracle, &(), &(1.0, 2.0));
        let d = r.get_f64("gamma.lower.norm.derivative").unwrap();
        assert!((d - (-2.0_f64).exp()).abs() < 1e-16);
    }

    #[test]
    fn matches_difference_quotient() {
        // P(a, x + h) - P(a, x - h) ≈ 2h ∂P/∂x
        let oracle = MpfrOracle::default();
        let (a, x, h) = (2.5, 1.75, 1e-6);
        let d = GammaDerivative
            .build(&oracle, &(), &(a, x))
            .get_f64("gamma.lower.norm.derivative")
            .unwrap();
        let p = |t: f64| oracle.gamma_incomplete(a, t).regularised().lower;
        let diff = (p(x + h) - p(x - h)).to_f64() / (2.0 * h);
        assert!((diff - d).abs() < 1e-9);
    }
}
