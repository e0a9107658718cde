// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Incomplete Beta and Gamma** - *Continued fractions in working precision*
//!
//! MPFR provides Γ and ln Γ but no incomplete integrals, so these are built from
//! the classic expansions:
//! - **Incomplete beta**: Lentz continued fraction on whichever side of the mean
//!   it converges, the other tail by complement against B(a, b)
//! - **Lower incomplete gamma**: power series for `x < a + 1`
//! - **Upper incomplete gamma**: Legendre continued fraction for `x ≥ a + 1`
//!
//! The complement is taken in working precision, where the tail being formed is
//! never the small one, so at most a few bits of the 300-odd are lost.

use std::cmp::Ordering;

use rug::ops::Pow;
use rug::Assign;

use crate::config::MAX_ORACLE_ITERATIONS;
use crate::oracle::{Incomplete, Real};

/// Relative convergence tolerance for a given working precision.
///
/// Leaves `prec / 8` bits of slack so rounding noise in the last few bits cannot
/// stall a loop that has already converged.
#[inline]
pub(crate) fn tolerance(prec: u32) -> Real {
    Real::with_val(prec, 1) >> (prec - prec / 8)
}

/// Floor used by the modified Lentz algorithm in place of zero denominators.
#[inline]
fn tiny(prec: u32) -> Real {
    Real::with_val(prec, 1) >> (4 * prec)
}

#[inline]
fn guard(v: &mut Real, tiny: &Real) {
    if v.cmp_abs(tiny) == Some(Ordering::Less) {
        v.assign(tiny);
    }
}

/// `|delta - 1| < eps`
#[inline]
fn converged(delta: &Real, eps: &Real) -> bool {
    let off = Real::with_val(delta.prec(), delta - 1u32);
    off.abs() < *eps
}

/// One step of the modified Lentz recurrence for `1 + aa / (1 + ...)`:
/// `d ← 1 / (1 + aa·d)`, `c ← 1 + aa / c`.
#[inline]
fn lentz_step(c: &mut Real, d: &mut Real, aa: &Real, tiny: &Real) {
    *d *= aa;
    *d += 1u32;
    guard(d, tiny);
    let mut next_c = Real::with_val(c.prec(), aa / &*c);
    next_c += 1u32;
    guard(&mut next_c, tiny);
    *c = next_c;
    d.recip_mut();
}

/// B(a, b) = Γ(a)Γ(b)/Γ(a+b) for positive arguments.
pub(crate) fn complete_beta(a: &Real, b: &Real) -> Real {
    let prec = a.prec();
    let ga = a.clone().gamma();
    let gb = b.clone().gamma();
    let gab = Real::with_val(prec, a + b).gamma();
    ga * gb / gab
}

/// Continued fraction for I_x(a, b), without the front factor `x^a (1-x)^b / a`.
///
/// Converges quickly for `x < (a + 1)/(a + b + 2)`.
fn beta_fraction(a: &Real, b: &Real, x: &Real) -> Real {
    let prec = a.prec();
    let tiny = tiny(prec);
    let eps = tolerance(prec);

    let qab = Real::with_val(prec, a + b);
    let qap = Real::with_val(prec, a + 1u32);
    let qam = Real::with_val(prec, a - 1u32);

    let mut c = Real::with_val(prec, 1);
    let mut d = Real::with_val(prec, &qab * x) / &qap;
    d = Real::with_val(prec, 1) - d;
    guard(&mut d, &tiny);
    d.recip_mut();
    let mut h = d.clone();

    for m in 1..=MAX_ORACLE_ITERATIONS as u32 {
        let mf = Real::with_val(prec, m);
        let m2 = Real::with_val(prec, 2 * m);

        // even step: m (b - m) x / ((a - 1 + 2m)(a + 2m))
        let mut aa = Real::with_val(prec, b - &mf);
        aa *= &mf;
        aa *= x;
        aa /= Real::with_val(prec, &qam + &m2) * Real::with_val(prec, a + &m2);
        lentz_step(&mut c, &mut d, &aa, &tiny);
        h *= &d;
        h *= &c;

        // odd step: -(a + m)(a + b + m) x / ((a + 2m)(a + 1 + 2m))
        let mut aa = Real::with_val(prec, a + &mf);
        aa *= Real::with_val(prec, &qab + &mf);
        aa *= x;
        aa /= Real::with_val(prec, a + &m2) * Real::with_val(prec, &qap + &m2);
        aa = -aa;
        lentz_step(&mut c, &mut d, &aa, &tiny);
        let delta = Real::with_val(prec, &d * &c);
        h *= &delta;

        if converged(&delta, &eps) {
            break;
        }
    }
    h
}

/// `x^a (1-x)^b / a`
fn beta_front(a: &Real, b: &Real, x: &Real) -> Real {
    let prec = a.prec();
    let one_minus_x = Real::with_val(prec, 1) - x;
    let xa = x.clone().pow(a);
    let xb = one_minus_x.pow(b);
    xa * xb / a
}

/// Un-normalised incomplete beta B_x(a, b), its complement and B(a, b).
///
/// * `x ≤ 0` → lower 0, upper B(a, b)
/// * `x ≥ 1` → lower B(a, b), upper 0
pub(crate) fn incomplete_beta(a: &Real, b: &Real, x: &Real) -> Incomplete {
    let prec = a.prec();
    let total = complete_beta(a, b);
    let zero = Real::new(prec);

    if *x <= 0 {
        return Incomplete {
            lower: zero,
            upper: total.clone(),
            total,
        };
    }
    if *x >= 1 {
        return Incomplete {
            lower: total.clone(),
            upper: zero,
            total,
        };
    }

    // Symmetry I_x(a, b) = 1 - I_{1-x}(b, a) keeps the fraction on its fast side.
    let split = Real::with_val(prec, a + 1u32) / (Real::with_val(prec, a + b) + 2u32);

    if *x < split {
        let lower = beta_front(a, b, x) * beta_fraction(a, b, x);
        let upper = Real::with_val(prec, &total - &lower);
        Incomplete {
            lower,
            upper,
            total,
        }
    } else {
        let y = Real::with_val(prec, 1) - x;
        let upper = beta_front(b, a, &y) * beta_fraction(b, a, &y);
        let lower = Real::with_val(prec, &total - &upper);
        Incomplete {
            lower,
            upper,
            total,
        }
    }
}

/// `x^a e^(-x)`, evaluated as `exp(a ln x - x)`.
fn gamma_front(a: &Real, x: &Real) -> Real {
    let mut e = x.clone().ln();
    e *= a;
    e -= x;
    e.exp()
}

/// Σ x^k / (a (a+1) ... (a+k)), the lower incomplete gamma series without its front factor.
fn gamma_series(a: &Real, x: &Real) -> Real {
    let prec = a.prec();
    let eps = tolerance(prec);
    let mut ap = a.clone();
    let mut del = Real::with_val(prec, 1) / a;
    let mut sum = del.clone();
    for _ in 0..MAX_ORACLE_ITERATIONS {
        ap += 1u32;
        del *= x;
        del /= &ap;
        sum += &del;
        let bound = Real::with_val(prec, &sum * &eps);
        if del.cmp_abs(&bound) == Some(Ordering::Less) {
            break;
        }
    }
    sum
}

/// Legendre continued fraction for Γ(a, x), without its front factor.
fn gamma_fraction(a: &Real, x: &Real) -> Real {
    let prec = a.prec();
    let tiny = tiny(prec);
    let eps = tolerance(prec);

    let mut b = Real::with_val(prec, x + 1u32);
    b -= a;
    let mut c = Real::with_val(prec, 1) / &tiny;
    let mut d = Real::with_val(prec, 1) / &b;
    let mut h = d.clone();

    for i in 1..=MAX_ORACLE_ITERATIONS as u32 {
        // an = -i (i - a)
        let mut an = Real::with_val(prec, i) - a;
        an *= i;
        an = -an;
        b += 2u32;

        d *= &an;
        d += &b;
        guard(&mut d, &tiny);
        let mut next_c = Real::with_val(prec, &an / &c);
        next_c += &b;
        guard(&mut next_c, &tiny);
        c = next_c;
        d.recip_mut();

        let delta = Real::with_val(prec, &d * &c);
        h *= &delta;
        if converged(&delta, &eps) {
            break;
        }
    }
    h
}

/// Lower γ(a, x), upper Γ(a, x) and Γ(a).
///
/// * `x ≤ 0` → lower 0, upper Γ(a)
pub(crate) fn incomplete_gamma(a: &Real, x: &Real) -> Incomplete {
    let prec = a.prec();
    let total = a.clone().gamma();

    if *x <= 0 {
        return Incomplete {
            lower: Real::new(prec),
            upper: total.clone(),
            total,
        };
    }

    let front = gamma_front(a, x);
    let split = Real::with_val(prec, a + 1u32);
    if *x < split {
        let lower = front * gamma_series(a, x);
        let upper = Real::with_val(prec, &total - &lower);
        Incomplete {
            lower,
            upper,
            total,
        }
    } else {
        let upper = front * gamma_fraction(a, x);
        let lower = Real::with_val(prec, &total - &upper);
        Incomplete {
            lower,
            upper,
            total,
        }
    }
}
