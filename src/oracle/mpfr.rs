// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **MPFR Oracle** - *`HighPrecisionOracle` on `rug::Float`*
//!
//! Direct MPFR primitives are used wherever one exists (Γ, ln|Γ|, ψ, ζ, erf, erfc).
//! Everything else is composed in working precision from those, the continued
//! fractions in [`incomplete`](crate::oracle::incomplete) and the Hurwitz zeta
//! expansion in [`polygamma`](crate::oracle::polygamma).

use std::cell::OnceCell;

use rug::float::Constant;
use rug::ops::Pow;

use crate::config::{check_precision, WORKING_PRECISION_BITS};
use crate::errors::ReferenceError;
use crate::oracle::incomplete::{complete_beta, incomplete_beta, incomplete_gamma};
use crate::oracle::polygamma::{polygamma, BernoulliTable};
use crate::oracle::{HighPrecisionOracle, Incomplete, Real, Tails};

/// Oracle evaluating in MPFR at a fixed working precision.
#[derive(Debug)]
pub struct MpfrOracle {
    prec: u32,
    bernoulli: OnceCell<BernoulliTable>,
}

impl MpfrOracle {
    /// Oracle at `prec` bits. Errors if MPFR cannot work at that precision.
    pub fn new(prec: u32) -> Result<Self, ReferenceError> {
        Ok(MpfrOracle {
            prec: check_precision(prec)?,
            bernoulli: OnceCell::new(),
        })
    }

    /// Built on first use of ψ⁽ⁿ⁾.
    #[inline]
    fn bernoulli(&self) -> &BernoulliTable {
        self.bernoulli.get_or_init(|| BernoulliTable::new(self.prec))
    }

    /// ln Γ(m + 1) = ln m!
    #[inline]
    fn ln_factorial(&self, m: u64) -> Real {
        let mut v = Real::with_val(self.prec, m);
        v += 1u32;
        v.ln_abs_gamma().0
    }

    /// (x - mean) / sd
    #[inline]
    fn standardise(&self, mean: f64, sd: f64, x: f64) -> Real {
        let mut z = self.lift(x);
        z -= mean;
        z /= sd;
        z
    }

    /// erfc(z / √2) / 2
    fn normal_upper(&self, z: &Real) -> Real {
        let root_two = Real::with_val(self.prec, 2).sqrt();
        let mut t = Real::with_val(self.prec, z / &root_two).erfc();
        t /= 2u32;
        t
    }
}

impl Default for MpfrOracle {
    fn default() -> Self {
        MpfrOracle {
            prec: WORKING_PRECISION_BITS,
            bernoulli: OnceCell::new(),
        }
    }
}

impl HighPrecisionOracle for MpfrOracle {
    #[inline]
    fn precision(&self) -> u32 {
        self.prec
    }

    fn gamma(&self, z: f64) -> Real {
        self.lift(z).gamma()
    }

    fn ln_gamma(&self, z: f64) -> Real {
        self.lift(z).ln_abs_gamma().0
    }

    fn beta(&self, a: f64, b: f64) -> Real {
        complete_beta(&self.lift(a), &self.lift(b))
    }

    fn beta_incomplete(&self, a: f64, b: f64, x: f64) -> Incomplete {
        incomplete_beta(&self.lift(a), &self.lift(b), &self.lift(x))
    }

    fn gamma_incomplete(&self, a: f64, x: f64) -> Incomplete {
        incomplete_gamma(&self.lift(a), &self.lift(x))
    }

    fn gamma_p_derivative(&self, a: f64, x: f64) -> Real {
        // exp((a - 1) ln x - x - ln Γ(a))
        let ra = self.lift(a);
        let rx = self.lift(x);
        let mut e = rx.clone().ln();
        e *= Real::with_val(self.prec, &ra - 1u32);
        e -= &rx;
        e -= ra.ln_abs_gamma().0;
        e.exp()
    }

    fn gamma_ratio(&self, a: f64, b: f64) -> Real {
        self.gamma(a) / self.gamma(b)
    }

    fn gamma_delta_ratio(&self, a: f64, delta: f64) -> Real {
        let ra = self.lift(a);
        let b = Real::with_val(self.prec, &ra + delta).gamma();
        ra.gamma() / b
    }

    fn polygamma(&self, n: u32, z: f64) -> Real {
        polygamma(n, &self.lift(z), self.bernoulli())
    }

    fn zeta(&self, s: f64) -> Real {
        self.lift(s).zeta()
    }

    fn erf(&self, z: f64) -> Real {
        self.lift(z).erf()
    }

    fn erfc(&self, z: f64) -> Real {
        self.lift(z).erfc()
    }

    fn binomial_pdf(&self, n: u64, success: f64, k: u64) -> Real {
        let prec = self.prec;
        if k > n {
            return Real::new(prec);
        }
        let s = self.lift(success);
        let f = Real::with_val(prec, 1u32 - &s);
        if s.is_zero() || f.is_zero() {
            let certain = if s.is_zero() { k == 0 } else { k == n };
            return Real::with_val(prec, u32::from(certain));
        }

        // ln C(n, k) + k ln s + (n - k) ln f
        let mut e = self.ln_factorial(n);
        e -= self.ln_factorial(k);
        e -= self.ln_factorial(n - k);
        e += s.ln() * Real::with_val(prec, k);
        e += f.ln() * Real::with_val(prec, n - k);
        e.exp()
    }

    /// Both tails are sums of the mass function over their own support, so neither
    /// is formed by cancellation.
    fn binomial_cdf(&self, n: u64, success: f64, k: u64) -> Tails {
        let prec = self.prec;
        if k >= n {
            return Tails {
                lower: Real::with_val(prec, 1),
                upper: Real::new(prec),
            };
        }
        let s = self.lift(success);
        let f = Real::with_val(prec, 1u32 - &s);
        if f.is_zero() {
            return Tails {
                lower: Real::new(prec),
                upper: Real::with_val(prec, 1),
            };
        }

        // t_0 = f^n ; t_(i+1) = t_i (n - i)/(i + 1) s/f
        let ratio = Real::with_val(prec, &s / &f);
        let mut term = f.pow(&Real::with_val(prec, n));
        let mut lower = Real::new(prec);
        let mut upper = Real::new(prec);
        for i in 0..=n {
            if i <= k {
                lower += &term;
            } else {
                upper += &term;
            }
            term *= Real::with_val(prec, n - i);
            term /= Real::with_val(prec, i + 1);
            term *= &ratio;
        }
        Tails { lower, upper }
    }

    fn normal_pdf(&self, mean: f64, sd: f64, x: f64) -> Real {
        // exp(-z²/2) / (sd √(2π))
        let prec = self.prec;
        let z = self.standardise(mean, sd, x);
        let mut e = z.square();
        e /= -2i32;
        let mut norm = Real::with_val(prec, Constant::Pi) * 2u32;
        norm = norm.sqrt();
        norm *= sd;
        e.exp() / norm
    }

    fn normal_cdf(&self, mean: f64, sd: f64, x: f64) -> Tails {
        let z = self.standardise(mean, sd, x);
        let upper = self.normal_upper(&z);
        let lower = self.normal_upper(&(-z));
        Tails { lower, upper }
    }

    fn frexp(&self, value: f64) -> (f64, i32) {
        libm::frexp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Real, e: f64, tol: f64) {
        let got = a.to_f64();
        let scale = 1.0_f64.max(e.abs());
        assert!((got - e).abs() <= tol * scale, "got {got}, expect {e}");
    }

    #[test]
    fn precision_is_validated() {
        assert!(MpfrOracle::new(334).is_ok());
        assert!(matches!(
            MpfrOracle::new(8),
            Err(ReferenceError::InvalidPrecision { .. })
        ));
        assert_eq!(MpfrOracle::default().precision(), WORKING_PRECISION_BITS);
    }

    #[test]
    fn gamma_and_log_gamma() {
        let o = MpfrOracle::default();
        close(&o.gamma(5.0), 24.0, 1e-15);
        close(&o.gamma(0.5), std::f64::consts::PI.sqrt(), 1e-15);
        // Γ(-0.5) = -2√π, ln|Γ(-0.5)| = ln(2√π)
        close(&o.gamma(-0.5), -2.0 * std::f64::consts::PI.sqrt(), 1e-15);
        close(&o.ln_gamma(-0.5), 1.2655121234846454, 1e-15);
        close(&o.ln_gamma(100.0), 359.1342053695754, 1e-15);
    }

    #[test]
    fn beta_complete() {
        let o = MpfrOracle::default();
        close(&o.beta(2.0, 3.0), 1.0 / 12.0, 1e-15);
        close(&o.beta(0.5, 0.5), std::f64::consts::PI, 1e-15);
    }

    #[test]
    fn zeta_values() {
        let o = MpfrOracle::default();
        close(&o.zeta(2.0), std::f64::consts::PI.powi(2) / 6.0, 1e-15);
        close(&o.zeta(-1.0), -1.0 / 12.0, 1e-15);
        assert!(o.zeta(-2.0).is_zero());
    }

    #[test]
    fn erf_pair() {
        let o = MpfrOracle::default();
        close(&o.erf(1.0), 0.8427007929497149, 1e-15);
        close(&o.erfc(1.0), 0.15729920705028513, 1e-15);
        close(&o.erfc(-1.0), 1.8427007929497148, 1e-15);
    }

    #[test]
    fn binomial_fair_coin() {
        // N = 10, p = 1/2, k = 5: 252/1024, 638/1024, 386/1024
        let o = MpfrOracle::default();
        close(&o.binomial_pdf(10, 0.5, 5), 0.24609375, 1e-15);
        let t = o.binomial_cdf(10, 0.5, 5);
        close(&t.lower, 0.623046875, 1e-15);
        close(&t.upper, 0.376953125, 1e-15);
    }

    #[test]
    fn binomial_edges() {
        let o = MpfrOracle::default();
        // P(X = 0) = q^N
        close(&o.binomial_pdf(5, 0.1, 0), 0.59049, 1e-15);
        let t = o.binomial_cdf(5, 0.1, 5);
        close(&t.lower, 1.0, 0.0);
        assert!(t.upper.is_zero());
        assert!(o.binomial_pdf(5, 0.1, 6).is_zero());
        close(&o.binomial_pdf(5, 0.0, 0), 1.0, 0.0);
        assert!(o.binomial_pdf(5, 1.0, 4).is_zero());
    }

    #[test]
    fn binomial_tails_complement() {
        let o = MpfrOracle::default();
        let t = o.binomial_cdf(5000, 0.002, 10);
        let total = Real::with_val(o.precision(), &t.lower + &t.upper);
        close(&total, 1.0, 1e-30);
    }

    #[test]
    fn normal_standard() {
        let o = MpfrOracle::default();
        close(&o.normal_pdf(0.0, 1.0, 0.0), 0.3989422804014327, 1e-15);
        let t = o.normal_cdf(0.0, 1.0, 1.96);
        close(&t.upper, 0.024997895148220435, 1e-15);
        close(&t.lower, 0.9750021048517795, 1e-15);
        // rescaled: N(25, 25²) at 50 is z = 1
        close(&o.normal_pdf(25.0, 25.0, 50.0), 0.24197072451914337 / 25.0, 1e-15);
    }

    #[test]
    fn gamma_ratios() {
        let o = MpfrOracle::default();
        close(&o.gamma_ratio(2.0, 3.0), 0.5, 1e-15);
        close(&o.gamma_ratio(7.0, 10.0), 1.0 / 504.0, 1e-15);
        close(&o.gamma_delta_ratio(7.0, 3.0), 1.0 / 504.0, 1e-15);
        close(&o.gamma_delta_ratio(10.0, -3.0), 504.0, 1e-15);
    }

    #[test]
    fn incomplete_gamma_derivative() {
        let o = MpfrOracle::default();
        // a = 1: e^-x
        close(&o.gamma_p_derivative(1.0, 1.0), 0.36787944117144233, 1e-15);
        // a = 2, x = 2: 2 e^-2
        close(&o.gamma_p_derivative(2.0, 2.0), 0.2706705664732254, 1e-15);
    }

    #[test]
    fn polygamma_orders() {
        let o = MpfrOracle::default();
        close(&o.polygamma(0, 1.0), -0.5772156649015329, 1e-15);
        close(
            &o.polygamma(1, 1.0),
            std::f64::consts::PI.powi(2) / 6.0,
            1e-15,
        );
        close(&o.polygamma(2, 1.0), -2.4041138063191885, 1e-15);
    }

    #[test]
    fn frexp_decomposition() {
        let o = MpfrOracle::default();
        assert_eq!(o.frexp(8.0), (0.5, 4));
        assert_eq!(o.frexp(-3.0), (-0.75, 2));
        assert_eq!(o.frexp(0.0), (0.0, 0));
    }
}
