// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **moogy-reference** - *Golden data for a statistics and special-functions library*
//!
//! Chooses informative input points for a family of functions, evaluates them in
//! extended precision and emits the results as JSON records for downstream
//! comparison tests.
//!
//! Data flows Dispatcher -> point selection -> record building -> dataset assembly:
//!
//! ```no_run
//! use moogy_reference::dispatch::Dispatcher;
//! use moogy_reference::oracle::MpfrOracle;
//!
//! let dispatcher = Dispatcher::standard();
//! let oracle = MpfrOracle::default();
//! if let Some(handler) = dispatcher.resolve("norm") {
//!     let output = handler.generate(&oracle).unwrap();
//!     println!("{}", serde_json::to_string(&output).unwrap());
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod errors;
pub mod record;
pub mod utils;

pub mod families;
pub mod oracle;

pub mod sampling {
    pub mod sampler;
    pub mod selector;
}

pub mod traits {
    pub mod sample_point;
}
