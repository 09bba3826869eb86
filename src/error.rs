//! Error types for the `framesample` crate.
//!
//! This module defines [`SampleError`], the unified error type returned by all
//! fallible operations in the crate. Variants carry enough context to diagnose
//! the problem without additional logging at the call site.

use std::io::Error as IoError;

use thiserror::Error;

/// The unified error type for all `framesample` operations.
///
/// Every public method that can fail returns `Result<T, SampleError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SampleError {
    /// A range's end value is not strictly after its start value, or the
    /// start is negative.
    #[error("Invalid range: start ({start}s) must be non-negative and less than end ({end}s)")]
    InvalidRange {
        /// The start of the range, in seconds.
        start: f64,
        /// The end of the range, in seconds.
        end: f64,
    },

    /// Sampler options failed validation before planning.
    #[error("Invalid sampler options: {reason}")]
    InvalidOptions {
        /// What was wrong with the options.
        reason: String,
    },

    /// The host failed to capture a planned sample.
    #[error("Failed to capture sample {index} at {timestamp}s: {reason}")]
    CaptureFailed {
        /// Export index of the sample that failed.
        index: u64,
        /// Requested timestamp, in seconds.
        timestamp: f64,
        /// Underlying reason reported by the host.
        reason: String,
    },

    /// The host failed to seek to a planned timestamp.
    #[error("Failed to seek to {timestamp}s: {reason}")]
    SeekFailed {
        /// Requested timestamp, in seconds.
        timestamp: f64,
        /// Underlying reason reported by the host.
        reason: String,
    },

    /// The operation was cancelled via a
    /// [`CancellationToken`](crate::CancellationToken).
    #[error("Operation cancelled")]
    Cancelled,

    /// An I/O error occurred while writing schedule output.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),
}
