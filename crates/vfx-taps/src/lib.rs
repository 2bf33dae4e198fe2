//! # vfx-taps
//!
//! Collapses weighted samples of a 1D reconstruction filter into hardware
//! bilinear texture taps.
//!
//! A separable resampling filter reads `N` texels per output pixel. Since a
//! linear-filtered fetch between two texels returns a weighted mix of both,
//! pairs of same-sign samples can share one fetch, nearly halving the
//! texture bandwidth. The catch is precision: tap positions and weights are
//! uploaded in a limited [`StorageFormat`](vfx_core::StorageFormat), and the
//! hardware quantizes the interpolation fraction. The combiners here account
//! for both and report the resulting error.
//!
//! - [`combine_two_samples`] - Merge two samples into one tap
//! - [`reduce_taps`] - Reduce a whole kernel
//! - [`single_tap`] - Store one sample unmerged
//!
//! # Usage
//!
//! ```rust
//! use vfx_core::f16;
//! use vfx_taps::{combine_two_samples, SubtexelPrecision};
//!
//! let tap = combine_two_samples::<f16>(0.3, 0.1, 4.0, 5.0, SubtexelPrecision::from_bits(8));
//! assert!(tap.sum_sq_error < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`vfx_core`] - `StorageFormat`, `f16`/`bf16`
//! - `tracing` - Reduction summaries
//!
//! # Used By
//!
//! - `vfx-cli` - `taps` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod combine;
mod reduce;
mod types;

pub use combine::{combine_two_samples, single_tap, WEIGHT_SUM_EPSILON};
pub use reduce::reduce_taps;
pub use types::{CombinedTap, Sample, SubtexelPrecision};
