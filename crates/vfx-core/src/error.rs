//! Error types for the workspace.
//!
//! # Overview
//!
//! The [`Error`] enum covers the recoverable failure modes:
//! - Encoding descriptors that violate their invariants
//! - Luma coefficient codes or names that name no supported standard
//!
//! Contract violations inside pure numeric kernels (e.g. combining taps of
//! differing sign) are not represented here; those panic.
//!
//! # Usage
//!
//! ```rust
//! use vfx_core::{Error, Result};
//!
//! fn check_levels(num_levels: u32) -> Result<()> {
//!     if num_levels < 2 {
//!         return Err(Error::invalid_format("num_levels", "must be greater than 1"));
//!     }
//!     Ok(())
//! }
//! assert!(check_levels(1).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving conversion constants.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A descriptor field is outside its valid domain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_core::Error;
    ///
    /// let err = Error::invalid_format("chroma_subsampling_x", "must be at least 1");
    /// assert!(err.to_string().contains("chroma_subsampling_x"));
    /// ```
    #[error("invalid Y'CbCr format: {field} {reason}")]
    InvalidFormat {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// An ITU-T H.273 matrix coefficient code with no supported coefficient set.
    #[error("unsupported luma coefficient code {0}")]
    UnsupportedStandard(u32),

    /// A luma standard name that could not be parsed.
    #[error("unknown luma standard '{0}'")]
    UnknownStandard(String),

    /// A sample plane does not hold the number of samples its size implies.
    #[error("{plane} plane has {actual} samples, expected {expected}")]
    PlaneSizeMismatch {
        /// Plane name (`y`, `cb` or `cr`)
        plane: &'static str,
        /// Samples implied by the plane dimensions
        expected: usize,
        /// Samples actually provided
        actual: usize,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this error was caused by an invalid descriptor field.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns `true` if this error names an unsupported or unknown standard.
    #[inline]
    pub fn is_standard_error(&self) -> bool {
        matches!(self, Self::UnsupportedStandard(_) | Self::UnknownStandard(_))
    }
}
