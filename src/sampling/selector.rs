// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Point Selection Strategies** - *Which inputs are worth evaluating*
//!
//! Building blocks the families compose into their point sets:
//! - **Exhaustive**: every integer of a small bounded domain
//! - **Stratified**: boundary and mode neighbourhoods of a large bounded domain,
//!   topped up with seeded uniform draws to an exact target size
//! - **Location/scale**: a standardised grid rescaled by location and scale, plus
//!   seeded draws from a wide symmetric window
//! - **Sweeps**: deterministic arithmetic and geometric progressions with pole skipping
//! - **Exponent sets**: seeded exponents covering a representable range and its edges

use std::collections::BTreeSet;

use num_traits::Float;

use crate::config::{
    LOCATION_SCALE_GRID, LOCATION_SCALE_RANDOM_HALF_WIDTH, LOCATION_SCALE_RANDOM_POINTS,
};
use crate::sampling::sampler::RandomSequence;

/// Every integer of the closed domain `[0, max]`, ascending.
#[inline]
pub fn exhaustive(max: u64) -> Vec<u64> {
    (0..=max).collect()
}

/// Mandatory points of the bounded domain `[0, max]`.
///
/// Contains both ends and every mode, each with its immediate neighbours. A
/// neighbour that would fall outside the domain is skipped rather than clamped,
/// so `0` never contributes `-1` and `max` never contributes `max + 1`.
pub fn boundary_and_modes(max: u64, modes: &[u64]) -> BTreeSet<u64> {
    let mut required = BTreeSet::new();
    for &centre in [0, max].iter().chain(modes) {
        let neighbourhood = [centre.checked_sub(1), Some(centre), centre.checked_add(1)];
        for k in neighbourhood.into_iter().flatten().filter(|&k| k <= max) {
            required.insert(k);
        }
    }
    required
}

/// Tops `required` up with uniform draws from `[0, max]` until it holds `target` points.
///
/// Draws already present do not count. If the domain has no more than `target`
/// points the whole domain is returned instead, since the fill could never finish.
/// A `required` set larger than `target` is returned unchanged.
pub fn stratified_fill<R: RandomSequence>(
    mut required: BTreeSet<u64>,
    max: u64,
    target: usize,
    rng: &mut R,
) -> Vec<u64> {
    if max < target as u64 {
        return exhaustive(max);
    }
    while required.len() < target {
        required.insert(rng.uniform_u64(0, max));
    }
    required.into_iter().collect()
}

/// Location/scale grid plus seeded window draws, ascending and deduplicated.
///
/// Grid offsets are the standardised values `-2.0, -1.875, ..., 2.0` mapped to
/// `offset * scale + location`. The random points are `location + U[-w, w)` with
/// `w = 8 * scale`.
pub fn location_scale<R: RandomSequence>(location: f64, scale: f64, rng: &mut R) -> Vec<f64> {
    let (low, high, step) = LOCATION_SCALE_GRID;
    let mut points = Vec::with_capacity(64);

    let mut z = low;
    while z <= high {
        points.push(z * scale + location);
        z += step;
    }

    let half_width = LOCATION_SCALE_RANDOM_HALF_WIDTH * scale;
    for _ in 0..LOCATION_SCALE_RANDOM_POINTS {
        points.push(rng.uniform_f64(-half_width, half_width) + location);
    }

    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup_by(|a, b| a.to_bits() == b.to_bits());
    points
}

/// End of an integer progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Exclusive(i64),
    Inclusive(i64),
}

/// Integer progression `start, start + step, ...` up to `end`. Preconditions: `step > 0`.
///
/// Families sweep in integer ticks (tenths of the argument, usually) and divide
/// afterwards, so every point is a single correctly rounded division rather than
/// an accumulated floating-point sum.
pub fn arithmetic(start: i64, end: End, step: i64) -> impl Iterator<Item = i64> {
    debug_assert!(step > 0);
    let within = move |t: &i64| match end {
        End::Exclusive(stop) => *t < stop,
        End::Inclusive(stop) => *t <= stop,
    };
    (0..)
        .map(move |i: i64| start + i * step)
        .take_while(within)
}

/// Arithmetic progression in tenths: `arithmetic(..) / 10`.
pub fn tenths(start: i64, end: End, step: i64) -> impl Iterator<Item = f64> {
    arithmetic(start, end, step).map(|t| t as f64 / 10.0)
}

/// Geometric progression `start, start * ratio, ...` while below `limit`.
///
/// Each term is the previous term times `ratio` in the working float type, which is
/// exactly reproducible under IEEE arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct GeometricSweep<T> {
    next: T,
    ratio: T,
    limit: T,
}

/// See [`GeometricSweep`]. Preconditions: `start > 0`, `ratio > 1`.
#[inline]
pub fn geometric<T: Float>(start: T, ratio: T, limit: T) -> GeometricSweep<T> {
    debug_assert!(start > T::zero() && ratio > T::one());
    GeometricSweep {
        next: start,
        ratio,
        limit,
    }
}

impl<T: Float> Iterator for GeometricSweep<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next < self.limit {
            let current = self.next;
            self.next = current * self.ratio;
            Some(current)
        } else {
            None
        }
    }
}

/// True on the simple poles of Γ, ψ and ψ⁽ⁿ⁾: `0, -1, -2, ...`.
#[inline]
pub fn is_non_positive_integer<T: Float>(z: T) -> bool {
    z <= T::zero() && z.floor() == z
}

/// Seeded set of exponents in `[low, high]` holding `required` plus uniform draws,
/// `target` distinct values in total, ascending.
pub fn exponent_set<R: RandomSequence>(
    (low, high): (i32, i32),
    required: &[i32],
    target: usize,
    rng: &mut R,
) -> BTreeSet<i32> {
    let mut wanted: BTreeSet<i32> = required.iter().copied().collect();
    let span = (high as i64 - low as i64 + 1) as usize;
    let target = target.min(span);
    while wanted.len() < target {
        wanted.insert(rng.uniform_i32(low, high));
    }
    wanted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::sampler::Sampler;

    #[test]
    fn exhaustive_covers_domain() {
        let pts = exhaustive(100);
        assert_eq!(pts.len(), 101);
        assert_eq!(pts.first(), Some(&0));
        assert_eq!(pts.last(), Some(&100));
    }

    #[test]
    fn boundary_neighbours_stay_in_domain() {
        let req = boundary_and_modes(200, &[0, 199]);
        let expect: BTreeSet<u64> = [0, 1, 198, 199, 200].into_iter().collect();
        assert_eq!(req, expect);
    }

    #[test]
    fn boundary_and_interior_modes() {
        let req = boundary_and_modes(1000, &[1, 999]);
        let expect: BTreeSet<u64> = [0, 1, 2, 998, 999, 1000].into_iter().collect();
        assert_eq!(req, expect);

        let req = boundary_and_modes(1000, &[100, 900]);
        assert_eq!(req.len(), 10);
        for k in [0, 1, 99, 100, 101, 899, 900, 901, 999, 1000] {
            assert!(req.contains(&k), "missing {k}");
        }
    }

    #[test]
    fn stratified_hits_target_exactly() {
        let req = boundary_and_modes(5000, &[5, 4995]);
        let mut rng = Sampler::new(19);
        let pts = stratified_fill(req.clone(), 5000, 50, &mut rng);
        assert_eq!(pts.len(), 50);
        assert!(req.iter().all(|k| pts.contains(k)));
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
        assert!(pts.iter().all(|&k| k <= 5000));
    }

    #[test]
    fn stratified_small_domain_is_exhaustive() {
        let mut rng = Sampler::new(1);
        let pts = stratified_fill(BTreeSet::new(), 20, 50, &mut rng);
        assert_eq!(pts, exhaustive(20));
    }

    #[test]
    fn location_scale_standard() {
        let mut rng = Sampler::new(23);
        let pts = location_scale(0.0, 1.0, &mut rng);
        assert_eq!(pts.len(), 43);
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
        assert!(pts.contains(&-2.0) && pts.contains(&2.0) && pts.contains(&0.125));
        assert!(pts.iter().all(|&z| (-8.0..8.0).contains(&z)));
    }

    #[test]
    fn location_scale_is_rescaled() {
        let mut rng = Sampler::new(24);
        let pts = location_scale(25.0, 25.0, &mut rng);
        assert!(pts.contains(&-25.0) && pts.contains(&75.0) && pts.contains(&25.0));
        assert!(pts.iter().all(|&z| (-175.0..225.0).contains(&z)));
    }

    #[test]
    fn tenths_sweep_bounds() {
        let excl: Vec<f64> = tenths(-50, End::Exclusive(150), 2).collect();
        assert_eq!(excl.len(), 100);
        assert_eq!(excl[0], -5.0);
        assert_eq!(*excl.last().unwrap(), 14.8);

        let incl: Vec<f64> = tenths(250, End::Inclusive(500), 12).collect();
        assert_eq!(incl.len(), 21);
        assert_eq!(*incl.last().unwrap(), 49.0);
    }

    #[test]
    fn geometric_sweep_counts() {
        let a: Vec<f64> = geometric(1e-3, 2.1, 1e3).collect();
        assert_eq!(a.len(), 19);
        assert!(a.iter().all(|&v| v < 1e3));
        let x: Vec<f64> = geometric(1e-3, 2.0_f64.sqrt().sqrt(), 1.0).collect();
        assert_eq!(x.len(), 40);
    }

    #[test]
    fn poles() {
        assert!(is_non_positive_integer(0.0));
        assert!(is_non_positive_integer(-3.0));
        assert!(!is_non_positive_integer(-2.5));
        assert!(!is_non_positive_integer(1.0));
    }

    #[test]
    fn exponent_set_keeps_edges() {
        let mut rng = Sampler::new(19);
        let set = exponent_set((-800, 709), &[-715, 709], 50, &mut rng);
        assert_eq!(set.len(), 50);
        assert!(set.contains(&-715) && set.contains(&709));
        assert!(set.iter().all(|e| (-800..=709).contains(e)));
    }
}
