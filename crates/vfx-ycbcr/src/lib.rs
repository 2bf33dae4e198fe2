//! # vfx-ycbcr
//!
//! Y'CbCr colorimetry: everything needed to turn decoded luma/chroma planes
//! back into R'G'B' on the GPU.
//!
//! This crate provides:
//!
//! - [`LumaStandard`] - Rec.601, Rec.709, Rec.2020 luma weights, H.273 codes
//! - [`YCbCrFormat`] - Encoding descriptor (range, levels, subsampling, siting)
//! - [`ycbcr_to_rgb`] - Conversion matrix and offset for a descriptor
//! - [`chroma_geometry`] - Luma -> chroma texel mapping per plane
//! - [`decode_planes`] - CPU reference decode
//!
//! # Usage
//!
//! ```rust
//! use vfx_ycbcr::{ycbcr_to_rgb, chroma_geometry, ChromaPlane, LumaStandard, YCbCrFormat};
//!
//! let format = YCbCrFormat::new(LumaStandard::Rec709, false, 1024).with_subsampling(2, 1);
//!
//! let conv = ycbcr_to_rgb(&format)?;
//! let white = conv.apply_codes([940, 512, 512]);
//! assert!((white.y - 1.0).abs() < 1e-9);
//!
//! let cb = chroma_geometry(&format, ChromaPlane::Cb)?;
//! assert_eq!(cb.scale, [0.5, 1.0]);
//! # Ok::<(), vfx_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde` - (De)serialize [`YCbCrFormat`] and [`LumaStandard`]
//!
//! # Dependencies
//!
//! - [`vfx_core`] - Error type
//! - [`vfx_math`] - f64 matrices, texture sampling emulation
//! - `tracing` - Diagnostics
//!
//! # Used By
//!
//! - `vfx-gpu` - Y'CbCr input shader constants
//! - `vfx-cli` - `matrix`, `chroma`, `shader` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod chroma;
mod coefficients;
mod format;
mod matrix;
mod reference;

pub use chroma::{chroma_geometries, chroma_geometry, chroma_plane_size, ChromaGeometry, ChromaPlane};
pub use coefficients::{LumaCoefficients, LumaStandard};
pub use format::YCbCrFormat;
pub use matrix::{range_constants, ycbcr_to_rgb, YCbCrConversion};
pub use reference::{decode_planes, YCbCrPlanes};
