// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Records** - *One output row per sample point*
//!
//! A [`Record`] maps dotted field names to numbers. Keys are held in a `BTreeMap`
//! so every record serialises with its fields in lexicographic order, regardless
//! of the order a family inserted them.
//!
//! All extended-precision values enter a record through [`narrow`] or
//! [`narrow_log`], the single place a [`Real`] becomes an `f64`. Clamping to the
//! field's mathematical range happens there and nowhere else.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::oracle::{Real, Tails};

/// Numeric field value.
///
/// Integers stay integers in the output (`k`, `n`, `exponent`); everything else is
/// a double. Non-finite doubles serialise as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Real(f64),
}

impl Value {
    /// The value as a double, whatever its variant.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Value::Unsigned(v) => v as f64,
            Value::Signed(v) => v as f64,
            Value::Real(v) => v,
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Unsigned(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Unsigned(v as u64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Signed(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

/// Valid range of a narrowed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// No clamping.
    Unbounded,
    /// `[0, 1]`: probabilities, CDFs, normalised incomplete integrals.
    Probability,
    /// `[-1, 1]`: erf.
    SignedUnit,
    /// `[0, 2]`: erfc.
    Complement,
}

impl Bound {
    #[inline]
    fn range(self) -> Option<(f64, f64)> {
        match self {
            Bound::Unbounded => None,
            Bound::Probability => Some((0.0, 1.0)),
            Bound::SignedUnit => Some((-1.0, 1.0)),
            Bound::Complement => Some((0.0, 2.0)),
        }
    }
}

/// Rounds `value` to the nearest double and clamps it into `bound`.
///
/// NaN passes through unchanged.
#[inline]
pub fn narrow(value: &Real, bound: Bound) -> f64 {
    let v = value.to_f64();
    match bound.range() {
        Some((low, high)) if !v.is_nan() => v.clamp(low, high),
        _ => v,
    }
}

/// Natural log taken in working precision, then rounded.
///
/// Taking the log before narrowing keeps tails that underflow a double, such as a
/// binomial mass of 1e-400, finite in log form. `ln 0 = -∞` serialises as `null`.
#[inline]
pub fn narrow_log(value: &Real) -> f64 {
    value.clone().ln().to_f64()
}

/// One output row: the sample point and its derived fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    #[inline]
    pub fn new() -> Self {
        Record(BTreeMap::new())
    }

    /// Adds a field holding a sample-point component or an exact value.
    #[inline]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Adds a narrowed oracle value.
    #[inline]
    pub fn with_real(self, key: &str, value: &Real, bound: Bound) -> Self {
        self.with(key, narrow(value, bound))
    }

    /// Adds `key` and `key.log`.
    pub fn with_value_and_log(self, key: &str, value: &Real, bound: Bound) -> Self {
        let log_key = format!("{key}.log");
        self.with_real(key, value, bound)
            .with(&log_key, narrow_log(value))
    }

    /// Adds the six-field distribution block under `prefix`:
    /// `pdf`, `cdf.lower`, `cdf.upper`, each with its `.log`.
    ///
    /// With no prefix the keys are bare (`pdf`, ...); with `Some("p")` they are
    /// `p.pdf`, and so on. The tails are clamped as probabilities; `pdf` takes
    /// `pdf_bound`, `Probability` for a mass and `Unbounded` for a density.
    pub fn with_distribution(
        self,
        prefix: Option<&str>,
        pdf: &Real,
        pdf_bound: Bound,
        tails: &Tails,
    ) -> Self {
        let key = |name: &str| match prefix {
            Some(p) => format!("{p}.{name}"),
            None => name.to_owned(),
        };
        self.with_value_and_log(&key("pdf"), pdf, pdf_bound)
            .with_value_and_log(&key("cdf.lower"), &tails.lower, Bound::Probability)
            .with_value_and_log(&key("cdf.upper"), &tails.upper, Bound::Probability)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.get(key).copied()
    }

    /// Field as a double; `None` if absent.
    #[inline]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).map(|v| v.as_f64())
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Field names in emission order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
