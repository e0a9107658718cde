// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Binomial Distribution** - *Mass and both tails for p and q = 1 - p*
//!
//! Each run fixes the trial count N and success probability p. Outcomes are
//! enumerated exhaustively up to N = 100; above that a 50-point stratified set
//! covers both ends and the modes of Binomial(N, p) and Binomial(N, q). Each record
//! carries the full distribution block for both parameterisations.

use crate::config::{EXHAUSTIVE_DOMAIN_LIMIT, STRATIFIED_TARGET_POINTS};
use crate::dataset::ParameterSet;
use crate::errors::{log_invalid_parameter, ReferenceError};
use crate::families::{FunctionFamily, Layout, Run};
use crate::oracle::HighPrecisionOracle;
use crate::record::{Bound, Record};
use crate::sampling::sampler::RandomSequence;
use crate::sampling::selector::{boundary_and_modes, exhaustive, stratified_fill};

/// Trial counts, outer loop of the sweep.
pub const TRIALS: [u64; 10] = [5, 10, 20, 50, 100, 200, 500, 1000, 2000, 5000];

/// Success probabilities, inner loop of the sweep.
pub const SUCCESS: [f64; 9] = [0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5];

/// Seed of the first run; each later run uses the next integer.
pub const FIRST_SEED: u64 = 19;

/// Trial count and success probability of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialParams {
    pub n: u64,
    pub p: f64,
}

impl BinomialParams {
    /// Failure probability `1 - p`, rounded once in double precision.
    #[inline]
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }
}

impl From<BinomialParams> for ParameterSet {
    fn from(params: BinomialParams) -> Self {
        ParameterSet::Binomial {
            n: params.n,
            p: params.p,
            q: params.q(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Binomial;

impl FunctionFamily for Binomial {
    type Point = u64;
    type Params = BinomialParams;

    const NAME: &'static str = "binomial";
    const LAYOUT: Layout = Layout::Grouped;

    fn description(&self) -> &'static str {
        "binomial pdf and both cdf tails, with p and q = 1 - p"
    }

    fn runs(&self) -> Vec<Run<BinomialParams>> {
        TRIALS
            .iter()
            .flat_map(|&n| SUCCESS.iter().map(move |&p| BinomialParams { n, p }))
            .zip(FIRST_SEED..)
            .map(|(params, seed)| Run::new(params, seed))
            .collect()
    }

    fn select<R: RandomSequence>(
        &self,
        params: &BinomialParams,
        rng: &mut R,
    ) -> Result<Vec<u64>, ReferenceError> {
        let BinomialParams { n, p } = *params;
        if !(0.0..=1.0).contains(&p) {
            return Err(ReferenceError::InvalidArguments(log_invalid_parameter(
                Self::NAME,
                "p",
                p,
            )));
        }
        if n <= EXHAUSTIVE_DOMAIN_LIMIT {
            return Ok(exhaustive(n));
        }

        // Modes, truncated as floor(N p) and floor(N q).
        let trials = n as f64;
        let mp = (trials * p) as u64;
        let mq = (trials * params.q()) as u64;
        let required = boundary_and_modes(n, &[mp, mq]);
        Ok(stratified_fill(required, n, STRATIFIED_TARGET_POINTS, rng))
    }

    fn build(
        &self,
        oracle: &dyn HighPrecisionOracle,
        params: &BinomialParams,
        &k: &u64,
    ) -> Record {
        let n = params.n;
        let mut record = Record::new().with("k", k);
        for (prefix, success) in [("p", params.p), ("q", params.q())] {
            let pdf = oracle.binomial_pdf(n, success, k);
            let tails = oracle.binomial_cdf(n, success, k);
            record = record.with_distribution(Some(prefix), &pdf, Bound::Probability, &tails);
        }
        record
    }
}
