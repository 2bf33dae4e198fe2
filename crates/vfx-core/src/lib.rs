//! # vfx-core
//!
//! Core types shared by the Y'CbCr colorimetry and texture-tap crates.
//!
//! This crate provides the foundational pieces used throughout the workspace:
//!
//! - [`Error`], [`Result`] - Unified error handling
//! - [`StorageFormat`] - Limited-precision numeric formats that computed
//!   constants are rounded into before the GPU sees them (`f32`, `f16`, `bf16`)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other crates depend on it:
//!
//! ```text
//! vfx-core (this crate)
//!    ^
//!    |
//!    +-- vfx-math (matrices, texture sampling)
//!    +-- vfx-ycbcr (Y'CbCr -> RGB matrices, chroma geometry)
//!    +-- vfx-taps (hardware tap reduction)
//!    +-- vfx-gpu (shader constant emission)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod storage;

// Re-exports for convenience
pub use error::*;
pub use storage::StorageFormat;

/// Re-export of the half-precision types implementing [`StorageFormat`].
pub use half::{bf16, f16};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::storage::StorageFormat;
    pub use half::{bf16, f16};
}
