// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Polygamma** - *ψ⁽ⁿ⁾(z) for n = 0..=10*

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::{is_non_positive_integer, tenths, End};

/// Highest derivative order swept.
pub const MAX_ORDER: u32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct Polygamma;

impl FunctionFamily for Polygamma {
    type Point = (u32, f64);
    type Params = ();

    const NAME: &'static str = "special_polygamma";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "polygamma functions of order 0 to 10"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(
        &self,
        _: &(),
        _: &mut R,
    ) -> Result<Vec<(u32, f64)>, ReferenceError> {
        Ok((0..=MAX_ORDER)
            .flat_map(|n| {
                tenths(-150, End::Inclusive(250), 2)
                    .filter(|&z| !is_non_positive_integer(z))
                    .map(move |z| (n, z))
            })
            .collect())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &(n, z): &(u32, f64)) -> Record {
        Record::new()
            .with("n", n)
            .with("z", z)
            .with_real("polygamma", &oracle.polygamma(n, z), Bound::Unbounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MpfrOracle;
    use crate::sampling::sampler::Sampler;

    #[test]
    fn every_order_skips_the_same_poles() {
        let pts = Polygamma.select(&(), &mut Sampler::new(0)).unwrap();
        assert_eq!(pts.len(), 11 * 185);
        assert!(pts.iter().all(|&(_, z)| !is_non_positive_integer(z)));
        assert_eq!(pts[0], (0, -14.8));
        assert_eq!(*pts.last().unwrap(), (10, 25.0));
    }

    #[test]
    fn trigamma_at_half() {
        // ψ₁(1/2) = π²/2
        let oracle = MpfrOracle::default();
        let r = Polygamma.build(&oracle, &(), &(1, 0.5));
        let expect = std::f64::consts::PI.powi(2) / 2.0;
        assert!((r.get_f64("polygamma").unwrap() - expect).abs() < 1e-14);
        assert_eq!(r.get_f64("n"), Some(1.0));
    }

    #[test]
    fn recurrence_across_unit_shift() {
        // ψ⁽ⁿ⁾(z + 1) = ψ⁽ⁿ⁾(z) + (-1)^n n! / z^(n+1)
        let oracle = MpfrOracle::default();
        let (n, z) = (3_u32, -2.3);
        let lhs = oracle.polygamma(n, z + 1.0).to_f64();
        let rhs = oracle.polygamma(n, z).to_f64() - 6.0 / z.powi(4);
        assert!((lhs - rhs).abs() <= 1e-12 * lhs.abs().max(1.0));
    }
}
