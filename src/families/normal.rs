// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution** - *Density and both tails on a location/scale grid*

use crate::dataset::ParameterSet;
use crate::errors::{log_invalid_parameter, ReferenceError};
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::location_scale;

/// Mean and standard deviation of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParams {
    pub mu: f64,
    pub sigma: f64,
}

impl From<NormalParams> for ParameterSet {
    fn from(params: NormalParams) -> Self {
        ParameterSet::Normal {
            mu: params.mu,
            sigma: params.sigma,
        }
    }
}

/// `(mu, sigma, seed)` of every run.
const RUNS: [(f64, f64, u64); 4] = [
    (0.0, 1.0, 23),
    (25.0, 25.0, 24),
    (1e-3, 1e-4, 25),
    (1e2, 1e3, 26),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Normal;

impl FunctionFamily for Normal {
    type Point = f64;
    type Params = NormalParams;

    const NAME: &'static str = "norm";
    const LABEL: &'static str = "normal";
    const LAYOUT: Layout = Layout::Grouped;

    fn description(&self) -> &'static str {
        "normal pdf and both cdf tails"
    }

    fn runs(&self) -> Vec<Run<NormalParams>> {
        RUNS.iter()
            .map(|&(mu, sigma, seed)| Run::new(NormalParams { mu, sigma }, seed))
            .collect()
    }

    fn select<R: RandomSequence>(
        &self,
        params: &NormalParams,
        rng: &mut R,
    ) -> Result<Vec<f64>, ReferenceError> {
        let NormalParams { mu, sigma } = *params;
        if !mu.is_finite() {
            return Err(ReferenceError::InvalidArguments(log_invalid_parameter(
                Self::NAME,
                "mu",
                mu,
            )));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ReferenceError::InvalidArguments(log_invalid_parameter(
                Self::NAME,
                "sigma",
                sigma,
            )));
        }
        Ok(location_scale(mu, sigma, rng))
    }

    fn build(&self, oracle: &dyn HighPrecisionOracle, params: &NormalParams, &x: &f64) -> Record {
        let NormalParams { mu, sigma } = *params;
        let pdf = oracle.normal_pdf(mu, sigma, x);
        let tails = oracle.normal_cdf(mu, sigma, x);
        Record::new()
            .with("z", x)
            .with_distribution(None, &pdf, Bound::Unbounded, &tails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MpfrOracle;
    use crate::sampling::sampler::Sampler;

    #[test]
    fn four_runs_seeded_23_to_26() {
        let runs = Normal.runs();
        let seeds: Vec<u64> = runs.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, vec![23, 24, 25, 26]);
        assert_eq!(runs[2].params, NormalParams { mu: 1e-3, sigma: 1e-4 });
    }

    #[test]
    fn standard_run_has_grid_and_random_points() {
        let mut rng = Sampler::new(23);
        let pts = Normal
            .select(&NormalParams { mu: 0.0, sigma: 1.0 }, &mut rng)
            .unwrap();
        assert_eq!(pts.len(), 43);
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        let mut rng = Sampler::new(23);
        for sigma in [0.0, -1.0, f64::INFINITY] {
            let res = Normal.select(&NormalParams { mu: 0.0, sigma }, &mut rng);
            assert!(matches!(res, Err(ReferenceError::InvalidArguments(_))));
        }
    }

    #[test]
    fn record_fields() {
        let oracle = MpfrOracle::default();
        let r = Normal.build(&oracle, &NormalParams { mu: 0.0, sigma: 1.0 }, &0.0);
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(
            keys,
            vec![
                "cdf.lower",
                "cdf.lower.log",
                "cdf.upper",
                "cdf.upper.log",
                "pdf",
                "pdf.log",
                "z"
            ]
        );
        assert_eq!(r.get_f64("cdf.lower"), Some(0.5));
        assert_eq!(r.get_f64("cdf.upper"), Some(0.5));
        assert!((r.get_f64("pdf").unwrap() - 0.3989422804014327).abs() < 1e-15);
    }

    #[test]
    fn narrow_density_exceeds_one() {
        // 1 / (sigma sqrt(2 pi)) at the mean
        let oracle = MpfrOracle::default();
        let params = NormalParams { mu: 1e-3, sigma: 1e-4 };
        let r = Normal.build(&oracle, &params, &1e-3);
        let pdf = r.get_f64("pdf").unwrap();
        assert!((pdf - 3989.422804014327).abs() < 1e-9, "pdf = {pdf}");
        assert!((r.get_f64("pdf.log").unwrap() - pdf.ln()).abs() < 1e-13);
        assert_eq!(r.get_f64("cdf.lower"), Some(0.5));
    }
}
