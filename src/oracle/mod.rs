// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **High-Precision Oracle** - *Trusted evaluation of special functions*
//!
//! The oracle is the only place extended-precision arithmetic happens. Every
//! function takes its inputs as the exact `f64` sample point, lifts them losslessly
//! into the working precision and returns an unrounded [`Real`]. Narrowing back to
//! `f64` is left to the record builder, which does it exactly once per field.
//!
//! ## Functions
//! - **Gamma family**: Γ, ln|Γ|, Γ(a)/Γ(b), incomplete Γ, ∂P(a,x)/∂x
//! - **Beta family**: B(a,b) and incomplete B with both tails
//! - **Polygamma and zeta**: ψ⁽ⁿ⁾(z) for n ≥ 0, Riemann ζ(s)
//! - **Error functions**: erf, erfc
//! - **Distributions**: binomial and normal mass/density and both tails
//! - **Decomposition**: frexp of a double
//!
//! All functions are pure: identical inputs give bit-identical outputs.

pub mod incomplete;
pub mod mpfr;
pub mod polygamma;

pub use mpfr::MpfrOracle;

/// Extended-precision working type.
pub type Real = rug::Float;

/// Lower and upper tail of a cumulative quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Tails {
    pub lower: Real,
    pub upper: Real,
}

/// Un-normalised incomplete integral with both tails and the complete integral.
///
/// `lower + upper == total` up to working-precision rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Incomplete {
    pub lower: Real,
    pub upper: Real,
    pub total: Real,
}

impl Incomplete {
    /// Both tails divided by the complete integral.
    pub fn regularised(&self) -> Tails {
        let prec = self.total.prec();
        Tails {
            lower: Real::with_val(prec, &self.lower / &self.total),
            upper: Real::with_val(prec, &self.upper / &self.total),
        }
    }
}

/// Trusted high-precision implementation of the functions under test.
///
/// Inputs are `f64` because sample points are doubles; outputs stay in working
/// precision. Callers must not pass a pole (non-positive integer to Γ or ψ⁽ⁿ⁾,
/// `s = 1` to ζ); the selectors exclude those points.
pub trait HighPrecisionOracle {
    /// Working precision in bits.
    fn precision(&self) -> u32;

    /// Lifts `x` exactly into working precision.
    fn lift(&self, x: f64) -> Real {
        Real::with_val(self.precision(), x)
    }

    /// Γ(z).
    fn gamma(&self, z: f64) -> Real;

    /// ln|Γ(z)|.
    fn ln_gamma(&self, z: f64) -> Real;

    /// B(a, b) = Γ(a)Γ(b)/Γ(a+b) for a, b > 0.
    fn beta(&self, a: f64, b: f64) -> Real;

    /// B_x(a, b) and its complement, with B(a, b) as total. Preconditions: a, b > 0.
    fn beta_incomplete(&self, a: f64, b: f64, x: f64) -> Incomplete;

    /// γ(a, x) and Γ(a, x), with Γ(a) as total. Preconditions: a > 0, x ≥ 0.
    fn gamma_incomplete(&self, a: f64, x: f64) -> Incomplete;

    /// ∂P(a, x)/∂x = x^(a-1) e^(-x) / Γ(a). Preconditions: a > 0, x > 0.
    fn gamma_p_derivative(&self, a: f64, x: f64) -> Real;

    /// Γ(a) / Γ(b).
    fn gamma_ratio(&self, a: f64, b: f64) -> Real;

    /// Γ(a) / Γ(a + delta).
    fn gamma_delta_ratio(&self, a: f64, delta: f64) -> Real;

    /// ψ⁽ⁿ⁾(z); n = 0 is the digamma function.
    fn polygamma(&self, n: u32, z: f64) -> Real;

    /// Riemann ζ(s).
    fn zeta(&self, s: f64) -> Real;

    fn erf(&self, z: f64) -> Real;

    fn erfc(&self, z: f64) -> Real;

    /// P(X = k) for X ~ Binomial(n, success).
    fn binomial_pdf(&self, n: u64, success: f64, k: u64) -> Real;

    /// P(X ≤ k) and P(X > k) for X ~ Binomial(n, success).
    fn binomial_cdf(&self, n: u64, success: f64, k: u64) -> Tails;

    /// Density of N(mean, sd²) at x.
    fn normal_pdf(&self, mean: f64, sd: f64, x: f64) -> Real;

    /// P(X ≤ x) and P(X > x) for X ~ N(mean, sd²).
    fn normal_cdf(&self, mean: f64, sd: f64, x: f64) -> Tails;

    /// Mantissa in `[0.5, 1)` (signed) and exponent with `value = m * 2^e`; zero gives `(±0, 0)`.
    fn frexp(&self, value: f64) -> (f64, i32);
}
