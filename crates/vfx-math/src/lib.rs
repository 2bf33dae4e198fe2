//! # vfx-math
//!
//! Math utilities for Y'CbCr conversion and texture sampling.
//!
//! This crate provides the primitives the colorimetry and tap code build on:
//!
//! - [`Mat3`] - 3x3 double precision matrices for Y'CbCr/RGB transforms
//! - [`Vec3`] - 3D double precision vectors for color triplets and offsets
//! - Texture fetch emulation ([`sample_linear_clamped`], [`sample_bilinear_clamped`])
//! - Integer helpers for texture sizes ([`div_round_up`], [`next_power_of_two`])
//! - HSV test colors ([`hsv_to_rgb`], [`hsv_to_rgb_normalized`])
//!
//! # Design
//!
//! Conversion matrices are derived once and then embedded into shader source,
//! so everything is computed in `f64`; rounding to the GPU format happens
//! at the very end. All matrix operations assume **row-major** storage and
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vfx_math::{Mat3, Vec3};
//!
//! // Rec.601 RGB -> luma row
//! let m = Mat3::from_rows([
//!     [0.299, 0.587, 0.114],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! let y = (m * Vec3::ONE).x;
//! assert!((y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with `DMat3`/`DVec3`
//!
//! # Used By
//!
//! - `vfx-ycbcr` - conversion matrices, chroma reconstruction
//! - `vfx-gpu` - constant emission, plane sizes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod interp;
mod int;
mod hsv;

pub use mat3::*;
pub use vec3::*;
pub use interp::*;
pub use int::*;
pub use hsv::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
