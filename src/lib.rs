//! Resampling-based statistical inference.
//!
//! Given two samples, this crate estimates the significance of an observed difference with
//! permutation tests, and the uncertainty of an estimated statistic with bootstrap confidence
//! intervals, including the slope and intercept of a least squares line.
//!
//! Every operation is a pure function of its inputs and of a random source passed in by the
//! caller, so a fixed seed always reproduces the same replicate distribution.
//!
//! ```
//! use resample_stats::hypothesis;
//! use resample_stats::univariate::indicators;
//! use resample_stats::{Comparison, Config, Statistic};
//!
//! let a: Vec<f64> = indicators(&[true, false, false, true, false, false]);
//! let b: Vec<f64> = indicators(&[true, true, true, false, true, true]);
//!
//! let config = Config::default()
//!     .nresamples(1_000)
//!     .comparison(Comparison::GreaterOrEqual)
//!     .seed(42);
//! let outcome = hypothesis::permutation_test(
//!     &a,
//!     &b,
//!     Statistic::Mean.difference::<f64>(),
//!     &config,
//!     &mut config.rng(),
//! )?;
//!
//! assert!(outcome.p_value >= 0.0 && outcome.p_value <= 1.0);
//! # Ok::<(), resample_stats::Error>(())
//! ```

#![allow(clippy::just_underscores_and_digits, clippy::transmute_ptr_to_ptr)]


#[macro_use]
mod macros;

pub mod bivariate;
pub mod config;
pub mod distribution;
pub mod estimate;
pub mod hypothesis;
pub mod rand_util;
pub mod univariate;

mod error;
mod float;

pub use crate::bivariate::Data;
pub use crate::config::Config;
pub use crate::distribution::{Comparison, ConfidenceInterval, Distribution};
pub use crate::error::{Error, Result};
pub use crate::estimate::{Estimate, Statistic};
pub use crate::float::Float;
pub use crate::rand_util::{RandomSource, Rng};
pub use crate::univariate::Sample;

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
