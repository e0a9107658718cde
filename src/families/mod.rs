// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Function Families** - *What is swept and what is recorded*
//!
//! Every function or distribution under test is one [`FunctionFamily`]: a list of
//! parameter runs, a point selector for a run and a record builder for a point.
//! The assembler in [`crate::dataset`] drives the three.
//!
//! ## Families
//! - **Distributions** (grouped into datasets): `binomial`, `norm`
//! - **Special functions** (flat record arrays): `special_beta`,
//!   `special_beta_incomplete`, `special_erf`, `special_gamma`,
//!   `special_gamma_derivative`, `special_gamma_incomplete`, `special_gamma_ratio`,
//!   `special_polygamma`, `special_zeta`
//! - **Utilities**: `utils_frexp`

pub mod beta;
pub mod beta_incomplete;
pub mod binomial;
pub mod erf;
pub mod frexp;
pub mod gamma;
pub mod gamma_derivative;
pub mod gamma_incomplete;
pub mod gamma_ratio;
pub mod normal;
pub mod polygamma;
pub mod zeta;

use std::fmt::Debug;

use crate::dataset::ParameterSet;
use crate::errors::ReferenceError;
use crate::oracle::HighPrecisionOracle;
use crate::record::Record;
use crate::sampling::sampler::RandomSequence;
use crate::traits::sample_point::SamplePoint;

pub use beta::Beta;
pub use beta_incomplete::BetaIncomplete;
pub use binomial::{Binomial, BinomialParams};
pub use erf::Erf;
pub use frexp::Frexp;
pub use gamma::Gamma;
pub use gamma_derivative::GammaDerivative;
pub use gamma_incomplete::GammaIncomplete;
pub use gamma_ratio::GammaRatio;
pub use normal::{Normal, NormalParams};
pub use polygamma::Polygamma;
pub use zeta::Zeta;

/// Shape of a family's output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One dataset per run, each carrying its parameters.
    Grouped,
    /// The records of every run concatenated into one array.
    Flat,
}

/// One evaluation run: fixed parameters and the seed of its random draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<P> {
    pub params: P,
    pub seed: u64,
}

impl<P> Run<P> {
    #[inline]
    pub fn new(params: P, seed: u64) -> Self {
        Run { params, seed }
    }
}

/// A function or distribution under test.
///
/// `select` decides where the oracle is evaluated and `build` turns one point into
/// one record. Neither keeps state between calls; all randomness arrives through
/// the `rng` handed to `select`, seeded per run by the assembler.
pub trait FunctionFamily {
    /// Input at which the family is evaluated.
    type Point: SamplePoint;

    /// Parameters fixed for a whole run.
    type Params: Copy + Debug + Into<ParameterSet>;

    /// Name the family is requested by.
    const NAME: &'static str;

    /// Value of the `distribution` key of grouped output.
    const LABEL: &'static str = Self::NAME;

    const LAYOUT: Layout;

    /// One-line description for `--list`.
    fn description(&self) -> &'static str;

    /// Runs in emission order.
    fn runs(&self) -> Vec<Run<Self::Params>>;

    /// Points for one run, in emission order.
    ///
    /// Points on a pole or outside the domain are left out rather than reported.
    /// Invalid parameters are an error.
    fn select<R: RandomSequence>(
        &self,
        params: &Self::Params,
        rng: &mut R,
    ) -> Result<Vec<Self::Point>, ReferenceError>;

    /// Evaluates the oracle at `point` and assembles its record.
    fn build(
        &self,
        oracle: &dyn HighPrecisionOracle,
        params: &Self::Params,
        point: &Self::Point,
    ) -> Record;
}
