// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Point-set housekeeping*
//!
//! Helpers shared by the assembler and the families.

use ahash::AHashSet;

use crate::traits::sample_point::SamplePoint;

/// Removes repeated points, keeping the first occurrence and the original order.
///
/// Order matters for output stability, so this is not a sort-and-dedup.
pub fn dedup_points<P: SamplePoint>(points: Vec<P>) -> Vec<P> {
    let mut seen = AHashSet::with_capacity(points.len());
    points.into_iter().filter(|p| seen.insert(p.key())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_and_order() {
        let pts = vec![3.0, 1.0, 3.0, 2.0, 1.0];
        assert_eq!(dedup_points(pts), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn dedup_tuples() {
        let pts = vec![(1_u32, 0.5), (1, 0.5), (2, 0.5)];
        assert_eq!(dedup_points(pts), vec![(1, 0.5), (2, 0.5)]);
    }

    #[test]
    fn signed_zero_survives() {
        let out = dedup_points(vec![0.0, -0.0, 0.0]);
        assert_eq!(out.len(), 2);
    }
}
