// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Incomplete Gamma** - *Regularised P and Q, and γ and Γ where they fit*
//!
//! Un-normalised tails are only recorded while ln Γ(a) stays below
//! [`LN_GAMMA_OVERFLOW_LIMIT`]; past that the field is left out of the record.

use crate::config::LN_GAMMA_OVERFLOW_LIMIT;
use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::geometric;

/// Common ratio of both axes of the shape/argument grid.
const GRID_RATIO: f64 = 2.1;

/// `(a, x)` with `a = 1e-3 · 2.1^i < 1e3` and `x = 1e-10 · 2.1^j < 1.5e3`, `a` outer.
///
/// Shared with the derivative family.
pub(crate) fn shape_argument_grid() -> Vec<(f64, f64)> {
    geometric(1e-3, GRID_RATIO, 1e3)
        .flat_map(|a| geometric(1e-10, GRID_RATIO, 1.5e3).map(move |x| (a, x)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GammaIncomplete;

impl FunctionFamily for GammaIncomplete {
    type Point = (f64, f64);
    type Params = ();

    const NAME: &'static str = "special_gamma_incomplete";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "regularised incomplete gamma P and Q, with γ(a, x) and Γ(a, x)"
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
        let ig = oracle.gamma_incomplete(a, x);
        let reg = ig.regularised();
        let mut record = Record::new()
            .with("a", a)
            .with("x", x)
            .with_value_and_log("gamma.lower.norm", &reg.lower, Bound::Probability)
            .with_value_and_log("gamma.upper.norm", &reg.upper, Bound::Probability);
        if oracle.ln_gamma(a) < LN_GAMMA_OVERFLOW_LIMIT {
            record = record
                .with_value_and_log("gamma.lower", &ig.lower, Bound::Unbounded)
                .with_value_and_log("gamma.upper", &ig.upper, Bound::Unbounded);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MpfrOracle;
    use crate::sampling::sampler::Sampler;

    #[test]
    fn grid_dimensions() {
        let pts = GammaIncomplete.select(&(), &mut Sampler::new(0)).unwrap();
        assert_eq!(pts.len(), 19 * 41);
        assert_eq!(pts[0], (1e-3, 1e-10));
        assert!(pts.iter().all(|&(a, x)| a < 1e3 && x < 1.5e3));
    }

    #[test]
    fn unnormalised_fields_are_conditional() {
        let oracle = MpfrOracle::default();
        let small = GammaIncomplete.build(&oracle, &(), &(3.0, 2.0));
        assert_eq!(small.len(), 10);
        // Γ(3, 2) = 10 e^-2
        let upper = small.get_f64("gamma.upper").unwrap();
        assert!((upper - 10.0 * (-2.0_f64).exp()).abs() < 1e-15);

        // ln Γ(300) ≈ 1405
        let large = GammaIncomplete.build(&oracle, &(), &(300.0, 290.0));
        assert_eq!(large.len(), 6);
        assert!(!large.contains("gamma.lower") && !large.contains("gamma.upper"));
        assert!(!large.contains("gamma.lower.log") && !large.contains("gamma.upper.log"));
    }

    #[test]
    fn regularised_tails_complement() {
        let oracle = MpfrOracle::default();
        for &(a, x) in &[(1e-3, 1e-10), (0.5, 0.5), (50.0, 49.0), (600.0, 1400.0)] {
            let r = GammaIncomplete.build(&oracle, &(), &(a, x));
            let p = r.get_f64("gamma.lower.norm").unwrap();
            let q = r.get_f64("gamma.upper.norm").unwrap();
            assert!((p + q - 1.0).abs() < 1e-15, "a={a} x={x}");
        }
    }
}
