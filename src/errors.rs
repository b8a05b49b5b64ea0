//! Error types.
//!
//! The fallible surface of this crate is narrow: timeline queries are total
//! functions with defined clamp behavior, so only authoring mistakes around
//! curve segmentation are reported as errors.

use thiserror::Error;

/// The error type for animation authoring operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinemaError {
    /// Segmentation boundaries must be strictly ascending.
    #[error("segmentation boundaries must be strictly ascending: {0:?}")]
    InvalidSegmentation(Vec<f32>),

    /// A segmentation needs at least a start and an end boundary.
    #[error("segmentation requires at least two boundaries (got {0})")]
    SegmentationTooShort(usize),

    /// Segmentation only applies to curve-mode tracks.
    #[error("segmentation is only supported on curve tracks")]
    SegmentationUnsupported,
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
