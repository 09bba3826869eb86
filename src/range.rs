//! Time ranges.
//!
//! [`TimeRange`] is the validated interval of media time a sampling plan
//! covers. Construction enforces the crate-wide invariant that the end of a
//! range is strictly after its start, so every downstream consumer can rely
//! on a positive duration.

use crate::error::SampleError;

/// A validated interval of media time, in seconds.
///
/// # Example
///
/// ```
/// use framesample::TimeRange;
///
/// let range = TimeRange::new(10.0, 11.5)?;
/// assert_eq!(range.duration(), 1.5);
/// # Ok::<(), framesample::SampleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    /// Create a new range from start and end timestamps in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] if `start` is negative, either
    /// bound is not finite, or `end` is not strictly greater than `start`.
    pub fn new(start: f64, end: f64) -> Result<Self, SampleError> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end <= start {
            return Err(SampleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The start of the range, in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The end of the range, in seconds.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The length of the range, in seconds. Always positive.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if `timestamp` lies within the range (inclusive on
    /// both ends).
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}
