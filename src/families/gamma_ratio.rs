// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gamma Ratios** - *Γ(a)/Γ(b) and Γ(a)/Γ(a + d)*
//!
//! Three regimes, emitted in this order:
//! - **Integer**: small integer `a` and odd `d`, where both ratios are rationals
//!   and the reciprocal forms are also recorded as a cross-check
//! - **Large magnitude**: `a` from 55 to 500 with `d` of either sign
//! - **Large difference**: non-integer `a` with `d` up to 51

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::traits::sample_point::SamplePoint;

const INTEGER_A: [f64; 4] = [2.0, 7.0, 12.0, 17.0];
const INTEGER_D: [f64; 3] = [1.0, 3.0, 5.0];

const LARGE_A: [f64; 4] = [55.0, 100.0, 200.0, 500.0];
const LARGE_D: [f64; 12] = [
    -50.0, -20.0, -10.0, -5.0, -2.0, -1.0, 1.0, 2.0, 5.0, 10.0, 20.0, 50.0,
];

const SPREAD_A: [f64; 4] = [1.125, 5.125, 10.125, 20.125];
const SPREAD_D: [f64; 6] = [1.0, 2.0, 5.0, 11.0, 21.0, 51.0];

/// One ratio evaluation: `b = a + delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPoint {
    pub a: f64,
    pub delta: f64,
    /// Also record Γ(b)/Γ(a) and Γ(b)/Γ(b - delta).
    pub reciprocal: bool,
}

impl RatioPoint {
    #[inline]
    pub fn b(&self) -> f64 {
        self.a + self.delta
    }
}

impl SamplePoint for RatioPoint {
    type Key = (u64, u64);

    #[inline(always)]
    fn key(&self) -> (u64, u64) {
        (self.a.key(), self.delta.key())
    }
}

/// Cartesian product of `a_values` and `deltas`, `a` outer.
fn regime(a_values: &[f64], deltas: &[f64], reciprocal: bool) -> Vec<RatioPoint> {
    a_values
        .iter()
        .flat_map(|&a| {
            deltas.iter().map(move |&delta| RatioPoint {
                a,
                delta,
                reciprocal,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GammaRatio;

impl FunctionFamily for GammaRatio {
    type Point = RatioPoint;
    type Params = ();

    const NAME: &'static str = "special_gamma_ratio";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "gamma ratio Γ(a)/Γ(b) and delta ratio Γ(a)/Γ(a + d)"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(
        &self,
        _: &(),
        _: &mut R,
    ) -> Result<Vec<RatioPoint>, ReferenceError> {
        let mut points = regime(&INTEGER_A, &INTEGER_D, true);
        points.extend(regime(&LARGE_A, &LARGE_D, false));
        points.extend(regime(&SPREAD_A, &SPREAD_D, false));
        Ok(points)
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), point: &RatioPoint) -> Record {
        let RatioPoint { a, delta, .. } = *point;
        let b = point.b();
        let mut record = Record::new()
            .with("a", a)
            .with("b", b)
            .with("d", delta)
            .with_real("ratio", &oracle.gamma_ratio(a, b), Bound::Unbounded)
            .with_real(
                "delta.ratio",
                &oracle.gamma_delta_ratio(a, delta),
                Bound::Unbounded,
            );
        if point.reciprocal {
            record = record
                .with_real(
                    "ratio.reciprocal",
                    &oracle.gamma_ratio(b, a),
                    Bound::Unbounded,
                )
                .with_real(
                    "delta.ratio.reciprocal",
                    &oracle.gamma_delta_ratio(b, -delta),
                    Bound::Unbounded,
                );
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
    fn regimes_in_order() {
        let pts = GammaRatio.select(&(), &mut Sampler::new(0)).unwrap();
        assert_eq!(pts.len(), 12 + 48 + 24);
        assert!(pts[..12].iter().all(|p| p.reciprocal));
        assert!(pts[12..].iter().all(|p| !p.reciprocal));
        assert_eq!(pts[12].b(), 5.0);
        assert!(pts.iter().all(|p| p.b() > 0.0));
    }

    #[test]
    fn integer_regime_is_rational() {
        // Γ(7)/Γ(10) = 1/504
        let oracle = MpfrOracle::default();
        let p = RatioPoint {
            a: 7.0,
            delta: 3.0,
            reciprocal: true,
        };
        let r = GammaRatio.build(&oracle, &(), &p);
        assert_eq!(r.len(), 7);
        assert!((r.get_f64("ratio").unwrap() - 1.0 / 504.0).abs() < 1e-18);
        assert_eq!(r.get_f64("ratio"), r.get_f64("delta.ratio"));
        assert_eq!(r.get_f64("ratio.reciprocal"), Some(504.0));
        assert_eq!(r.get_f64("delta.ratio.reciprocal"), Some(504.0));
    }

    #[test]
    fn large_regime_omits_reciprocals() {
        let oracle = MpfrOracle::default();
        let p = RatioPoint {
            a: 500.0,
            delta: -1.0,
            reciprocal: false,
        };
        let r = GammaRatio.build(&oracle, &(), &p);
        assert_eq!(r.len(), 5);
        // Γ(500)/Γ(499) = 499
        assert_eq!(r.get_f64("ratio"), Some(499.0));
    }
}
