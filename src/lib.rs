//! # Streamstat
//!
//! Single-pass, numerically stable streaming statistics for Rust.
//!
//! Streamstat computes running aggregates (mean, variance, and standard
//! deviation) in one forward pass with O(1) memory, over native floats as
//! well as user-defined "quantity" types: types that support addition,
//! division by a count, and comparison, but not necessarily a native square
//! root (arbitrary-precision integers being the motivating case).
//!
//! ## Features
//!
//! - **Incremental mean**: per-element correction instead of sum-then-divide,
//!   stable for long streams of large values
//! - **Welford variance**: single-pass mean and sum-of-squared-deviations
//!   without catastrophic cancellation
//! - **Generic square root**: binary digit-by-digit for shift-capable
//!   integer types, Newton-Raphson for field-like types, so standard
//!   deviation works where no native `sqrt` exists
//! - **Seeded accumulation**: supply the additive identity for types that
//!   cannot be default-constructed to zero
//!
//! ## Quick Start
//!
//! ```rust
//! use streamstat::prelude::*;
//!
//! let latencies = [1.0f64, 10.0, 40.0, 15.0, 4.0, 5.0, 22.0];
//!
//! let m = mean(latencies).unwrap();
//! let v = variance(latencies, Normalization::Sample).unwrap();
//! let sd = std_dev(latencies, Normalization::Sample).unwrap();
//!
//! assert!((m - 13.857).abs() < 1e-3);
//! assert!((v - 184.476).abs() < 1e-3);
//! assert!((sd - v.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Incremental Usage
//!
//! Accumulators expose the same single-pass state for streaming input:
//!
//! ```rust
//! use streamstat::prelude::*;
//!
//! let mut moments = RunningMoments::<f64>::new();
//! for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     moments.add(value);
//! }
//!
//! assert!((moments.mean().unwrap() - 5.0).abs() < 1e-9);
//! assert!((moments.variance(Normalization::Population).unwrap() - 4.0).abs() < 1e-9);
//! ```
//!
//! ## Insufficient Data
//!
//! There are no runtime errors: too little data yields `None` rather than a
//! panic or an in-band NaN. The mean of an empty stream is `None` (a seeded
//! mean returns its seed), and variance and standard deviation are `None`
//! for any stream of fewer than three elements. The three-element floor is
//! a deliberate policy, documented on [`statistics::Normalization`].
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support
//! - `libm`: float math via `libm` for `no_std` builds; building with
//!   `default-features = false` requires enabling either `std` or `libm`,
//!   since float operations come from `num-traits` through one of the two
//! - `serde`: serialization of accumulator state
//! - `bigint`: seeded accumulation and integer square root for
//!   `num-bigint` types
//! - `full`: enable everything

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("streamstat needs float math: enable the `std` feature or `libm` for no_std");

// Core traits always available
pub mod traits;

pub mod roots;
pub mod statistics;

pub mod prelude {
    pub use crate::roots::{binary_sqrt, newton_sqrt};
    pub use crate::statistics::{
        mean, seeded_mean, seeded_std_dev, seeded_variance, std_dev, variance, Normalization,
        RunningMean, RunningMoments, SeededMean, SeededMoments,
    };
    pub use crate::traits::*;
}

pub use statistics::{Normalization, RunningMean, RunningMoments, SeededMean, SeededMoments};
