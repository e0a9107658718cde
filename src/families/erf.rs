// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Function** - *erf and erfc at ±e^l*
//!
//! Arguments span e^-25 to e^25 in half-unit steps of the log, each with both
//! signs. Points are synthesised with the pure-software `libm::exp` so the sweep is
//! identical on every host.

use crate::errors::ReferenceError;
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::{arithmetic, End};

/// Log-magnitude sweep in half units: `l = t / 2` for `t` in `-50..=50`.
const HALF_LOG_RANGE: (i64, i64) = (-50, 50);

#[derive(Debug, Clone, Copy, Default)]
pub struct Erf;

impl FunctionFamily for Erf {
    type Point = f64;
    type Params = ();

    const NAME: &'static str = "special_erf";
    const LAYOUT: Layout = Layout::Flat;

    fn description(&self) -> &'static str {
        "error function and its complement"
    }

    fn runs(&self) -> Vec<Run<()>> {
        vec![Run::new((), 0)]
    }

    fn select<R: RandomSequence>(&self, _: &(), _: &mut R) -> Result<Vec<f64>, ReferenceError> {
        let (low, high) = HALF_LOG_RANGE;
        Ok(arithmetic(low, End::Inclusive(high), 1)
            .map(|t| libm::exp(t as f64 / 2.0))
            .flat_map(|z| [z, -z])
            .collect())
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, _: &(), &z: &f64) -> Record {
        Record::new()
            .with("z", z)
            .with_real("erf", &oracle.erf(z), Bound::SignedUnit)
            .with_real("erfc", &oracle.erfc(z), Bound::Complement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MpfrOracle;
    use crate::sampling::sampler::Sampler;

    #[test]
    fn both_signs_of_every_magnitude() {
        let pts = Erf.select(&(), &mut Sampler::new(0)).unwrap();
        assert_eq!(pts.len(), 202);
        assert_eq!(pts[100], 1.0);
        assert_eq!(pts[101], -1.0);
        assert!(pts.chunks(2).all(|c| c[0] == -c[1] && c[0] > 0.0));
    }

    #[test]
    fn saturated_values_stay_in_range() {
        let oracle = MpfrOracle::default();
        let big = libm::exp(25.0);
        let pos = Erf.build(&oracle, &(), &big);
        assert_eq!(pos.get_f64("erf"), Some(1.0));
        assert_eq!(pos.get_f64("erfc"), Some(0.0));
        let neg = Erf.build(&oracle, &(), &-big);
        assert_eq!(neg.get_f64("erf"), Some(-1.0));
        assert_eq!(neg.get_f64("erfc"), Some(2.0));
    }

    #[test]
    fn small_argument_is_linear() {
        // erf(z) ≈ 2z/√π for tiny z
        let oracle = MpfrOracle::default();
        let z = libm::exp(-25.0);
        let r = Erf.build(&oracle, &(), &z);
        let expect = 2.0 * z / std::f64::consts::PI.sqrt();
        assert!((r.get_f64("erf").unwrap() - expect).abs() <= expect * 1e-15);
        assert!((r.get_f64("erfc").unwrap() - (1.0 - expect)).abs() < 1e-15);
    }
}
