// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Reference Generation Error Handling*
//!
//! Error types for reference data generation.
//!
//! ## Error Categories
//! - **Argument Errors**: Distribution parameters outside their domain
//! - **Precision Errors**: Working precision outside the range MPFR supports
//! - **Output Errors**: Serialisation and I/O failures while emitting the document
//!
//! Out-of-domain sample points, precision overshoot and overflow-prone fields are
//! not errors: they are skipped, clamped and omitted respectively.

use thiserror::Error;

/// Error type for all reference generation operations.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Parameters supplied to a point selector are outside their domain.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Requested working precision is not supported.
    #[error("Invalid precision: {bits} bits (supported range {min}..={max})")]
    InvalidPrecision { bits: u32, min: u32, max: u32 },

    /// The assembled document could not be serialised.
    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates a formatted error message for a distribution parameter outside its domain.
///
/// # Arguments
/// * `family` - Family whose selector rejected the parameter
/// * `name` - Parameter name
/// * `value` - Offending value
pub fn log_invalid_parameter(family: &str, name: &str, value: impl std::fmt::Display) -> String {
    format!("{} => invalid {}: {}", family, name, value)
}
