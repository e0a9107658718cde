//! Shared assertions for the integration tests.
//!
//! `assert_close` and `assert_slice_close` compare with a relative tolerance above
//! magnitude 1 and an absolute one below. `field` reads one value out of a record
//! and `column` reads the same field from every record of a generated document.

#![allow(unused)]

use moogy_reference::dataset::Output;
use moogy_reference::record::Record;

/// Relative tolerance above magnitude 1, absolute below.
pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    let scale = 1.0_f64.max(e.abs());
    let ok = (a - e).abs() <= tol * scale;
    assert!(ok, "mismatch: got {a}, expect {e} (tol={tol})");
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        if ei.is_infinite() {
            assert!(
                ai.is_infinite() && ai.is_sign_positive() == ei.is_sign_positive(),
                "idx {i}: expected {ei}, got {ai}"
            );
            continue;
        }
        let scale = 1.0_f64.max(ei.abs());
        let ok = (ai - ei).abs() <= tol * scale;
        assert!(ok, "idx {i}: got {ai}, expect {ei} (tol={tol})");
    }
}

/// Field `key` of `record`; panics if absent.
pub fn field(record: &Record, key: &str) -> f64 {
    record
        .get_f64(key)
        .unwrap_or_else(|| panic!("record has no field {key}"))
}

/// `key` of every record in the document.
pub fn column(output: &Output, key: &str) -> Vec<f64> {
    output.records().map(|r| field(r, key)).collect()
}
