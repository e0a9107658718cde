// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SamplePoint trait** - *Hashable identity for evaluation inputs*

use std::fmt::Debug;

/// An input at which a family is evaluated: a scalar, a pair or a triple.
///
/// Floating-point inputs are not `Eq`/`Hash`, so every point exposes a key built
/// from the IEEE 754 bit patterns of its components. Two points with the same key
/// are the same evaluation, which is what deduplication within a dataset needs.
/// `+0.0` and `-0.0` have different keys and are kept as distinct points.
pub trait SamplePoint: Copy + Debug {
    /// Bit-exact identity of the point.
    type Key: Eq + std::hash::Hash + Copy;

    fn key(&self) -> Self::Key;
}

impl SamplePoint for f64 {
    type Key = u64;

    #[inline(always)]
    fn key(&self) -> u64 {
        self.to_bits()
    }
}

impl SamplePoint for u64 {
    type Key = u64;

    #[inline(always)]
    fn key(&self) -> u64 {
        *self
    }
}

impl SamplePoint for u32 {
    type Key = u32;

    #[inline(always)]
    fn key(&self) -> u32 {
        *self
    }
}

impl SamplePoint for i32 {
    type Key = i32;

    #[inline(always)]
    fn key(&self) -> i32 {
        *self
    }
}

impl<A: SamplePoint, B: SamplePoint> SamplePoint for (A, B) {
    type Key = (A::Key, B::Key);

    #[inline(always)]
    fn key(&self) -> Self::Key {
        (self.0.key(), self.1.key())
    }
}

impl<A: SamplePoint, B: SamplePoint, C: SamplePoint> SamplePoint for (A, B, C) {
    type Key = (A::Key, B::Key, C::Key);

    #[inline(always)]
    fn key(&self) -> Self::Key {
        (self.0.key(), self.1.key(), self.2.key())
    }
}
