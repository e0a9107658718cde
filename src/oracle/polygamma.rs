// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Polygamma** - *ψ⁽ⁿ⁾ through the Hurwitz zeta function*
//!
//! MPFR supplies the digamma function only. For n ≥ 1
//!
//! ```text
//! ψ⁽ⁿ⁾(z) = (-1)^(n+1) n! ζ(n+1, z)
//! ```
//!
//! and ζ(s, z) is evaluated by shifting z upwards with the recurrence
//! `ζ(s, z) = z^-s + ζ(s, z+1)` until it is large, then summing the Euler-Maclaurin
//! tail. The recurrence is valid for negative non-integer z too, so no reflection
//! formula is needed.

use std::cmp::Ordering;

use rug::float::Constant;
use rug::ops::Pow;

use crate::oracle::incomplete::tolerance;
use crate::oracle::Real;

/// Euler-Maclaurin coefficients `B₂ⱼ / (2j)!`, j = 1, 2, ...
///
/// Built from `B₂ⱼ/(2j)! = (-1)^(j+1) 2 ζ(2j) / (2π)^(2j)` so no rational
/// arithmetic is needed.
#[derive(Debug, Clone)]
pub struct BernoulliTable {
    coeffs: Vec<Real>,
}

impl BernoulliTable {
    /// Table sized for `prec`: the shift threshold of [`hurwitz_zeta`] makes the
    /// tail converge long before `prec / 3` terms.
    pub fn new(prec: u32) -> Self {
        let count = (prec / 3).max(16);
        let two_pi = Real::with_val(prec, Constant::Pi) * 2u32;
        let two_pi_sq = Real::with_val(prec, &two_pi * &two_pi);
        let mut two_pi_pow = two_pi_sq.clone();
        let mut coeffs = Vec::with_capacity(count as usize);
        for j in 1..=count {
            let mut c = Real::with_val(prec, Real::zeta_u(2 * j));
            c *= 2u32;
            c /= &two_pi_pow;
            if j % 2 == 0 {
                c = -c;
            }
            coeffs.push(c);
            two_pi_pow *= &two_pi_sq;
        }
        BernoulliTable { coeffs }
    }
}

/// Hurwitz ζ(s, z) for integer `s ≥ 2`. Preconditions: z is not a non-positive integer.
pub fn hurwitz_zeta(s: u32, z: &Real, table: &BernoulliTable) -> Real {
    debug_assert!(s >= 2);
    let prec = z.prec();
    let eps = tolerance(prec);
    let neg_s = -(s as i32);
    let threshold = prec / 3 + s;

    let mut head = Real::new(prec);
    let mut w = z.clone();
    while w < threshold {
        head += w.clone().pow(neg_s);
        w += 1u32;
    }

    // w^(1-s)/(s-1) + w^-s/2
    let mut tail = w.clone().pow(1 - s as i32);
    tail /= s - 1;
    tail += w.clone().pow(neg_s) / 2u32;

    let w_sq = Real::with_val(prec, &w * &w);
    // rising factorial (s)_(2j-1) and w^(-s-2j+1), both at j = 1
    let mut rising = Real::with_val(prec, s);
    let mut w_pow = w.clone().pow(neg_s - 1);
    let mut previous: Option<Real> = None;

    for (j, coeff) in (1u32..).zip(table.coeffs.iter()) {
        let term = Real::with_val(prec, coeff * &rising) * &w_pow;

        // The expansion is asymptotic: stop at its smallest term if it turns.
        if let Some(prev) = &previous {
            if term.cmp_abs(prev) != Some(Ordering::Less) {
                break;
            }
        }
        tail += &term;

        let bound = Real::with_val(prec, &tail * &eps);
        if term.cmp_abs(&bound) == Some(Ordering::Less) {
            break;
        }

        rising *= s + 2 * j - 1;
        rising *= s + 2 * j;
        w_pow /= &w_sq;
        previous = Some(term);
    }

    head + tail
}

/// ψ⁽ⁿ⁾(z). Preconditions: z is not a non-positive integer.
pub fn polygamma(n: u32, z: &Real, table: &BernoulliTable) -> Real {
    if n == 0 {
        return z.clone().digamma();
    }
    let prec = z.prec();
    let zeta = hurwitz_zeta(n + 1, z, table);
    let value = zeta * Real::with_val(prec, Real::factorial(n));
    if n % 2 == 1 {
        value
    } else {
        -value
    }
}
