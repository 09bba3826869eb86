//! Sampling plans.
//!
//! This module provides [`SamplingPlan`], the immutable decision of *how* a
//! time range will be sampled, and [`Sample`], one requested capture. A plan
//! is derived once from a [`TimeRange`] plus two knobs — the maximum number
//! of samples and the short-range threshold — and chooses between two modes:
//!
//! - [`SamplingMode::EveryFrame`] for ranges no longer than the threshold:
//!   the host steps through decoded frames one at a time and every frame in
//!   the range is captured (up to the sample budget).
//! - [`SamplingMode::FixedStep`] for longer ranges: evenly spaced timestamps
//!   are computed so that the budget spans the whole range, first sample at
//!   the range start and last at (or just before) the range end.
//!
//! # Example
//!
//! ```
//! use framesample::{SamplingMode, SamplingPlan, TimeRange};
//!
//! let range = TimeRange::new(0.0, 10.0)?;
//! let plan = SamplingPlan::build(range, 50, 2.0)?;
//!
//! assert_eq!(plan.mode(), SamplingMode::FixedStep);
//! assert!((plan.step().unwrap() - 10.0 / 49.0).abs() < 1e-12);
//! # Ok::<(), framesample::SampleError>(())
//! ```

use crate::error::SampleError;
use crate::iterator::{FrameAdvance, SampleIterator};
use crate::range::TimeRange;

/// How a range will be walked when producing samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Capture every decoded frame the host presents, in order.
    ///
    /// Chosen for ranges no longer than the short-range threshold, where
    /// seeking between fixed timestamps would skip or duplicate frames.
    EveryFrame,
    /// Capture at evenly spaced timestamps computed up front.
    FixedStep,
}

/// A single requested capture.
///
/// Yielded by [`SampleIterator`]; the `index` is the monotonic export index
/// starting at 0, suitable for zero-padded output file naming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Monotonic export index, starting at 0.
    pub index: u64,
    /// Requested timestamp, in seconds.
    pub timestamp: f64,
}

/// The immutable sampling decision for one range.
///
/// Built once via [`SamplingPlan::build`]; holds no reference to the range
/// it was derived from, so the same plan value can be inspected freely
/// before the sequence is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct SamplingPlan {
    mode: SamplingMode,
    step: Option<f64>,
    max_samples: u64,
}

impl SamplingPlan {
    /// Decide how to sample `range`.
    ///
    /// Ranges no longer than `short_threshold` seconds select
    /// [`SamplingMode::EveryFrame`]; longer ranges select
    /// [`SamplingMode::FixedStep`] with
    /// `step = range.duration() / (max_samples - 1)`, which places the first
    /// sample at the range start and the last at the range end.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidOptions`] if `max_samples < 2` or
    /// `short_threshold` is not a positive finite number. Range validity is
    /// enforced by [`TimeRange`] construction.
    ///
    /// # Example
    ///
    /// ```
    /// use framesample::{SamplingMode, SamplingPlan, TimeRange};
    ///
    /// // A 1.5 s range under a 2 s threshold steps frame by frame.
    /// let short = TimeRange::new(10.0, 11.5)?;
    /// let plan = SamplingPlan::build(short, 50, 2.0)?;
    /// assert_eq!(plan.mode(), SamplingMode::EveryFrame);
    /// assert!(plan.step().is_none());
    /// # Ok::<(), framesample::SampleError>(())
    /// ```
    pub fn build(
        range: TimeRange,
        max_samples: u64,
        short_threshold: f64,
    ) -> Result<Self, SampleError> {
        if max_samples < 2 {
            return Err(SampleError::InvalidOptions {
                reason: format!("max_samples must be at least 2 (got {max_samples})"),
            });
        }
        if !short_threshold.is_finite() || short_threshold <= 0.0 {
            return Err(SampleError::InvalidOptions {
                reason: format!("short_threshold must be positive (got {short_threshold})"),
            });
        }

        let plan = if range.duration() <= short_threshold {
            Self {
                mode: SamplingMode::EveryFrame,
                step: None,
                max_samples,
            }
        } else {
            Self {
                mode: SamplingMode::FixedStep,
                step: Some(range.duration() / (max_samples - 1) as f64),
                max_samples,
            }
        };

        log::debug!(
            "Built sampling plan: mode={:?} step={:?} max_samples={} for range {:.3}s..{:.3}s",
            plan.mode,
            plan.step,
            plan.max_samples,
            range.start(),
            range.end(),
        );

        Ok(plan)
    }

    /// The sampling mode chosen for the range.
    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    /// The fixed step between samples, in seconds.
    ///
    /// `None` in [`SamplingMode::EveryFrame`] mode — the host's frame
    /// cadence decides the spacing there.
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// The maximum number of samples the sequence will produce.
    pub fn max_samples(&self) -> u64 {
        self.max_samples
    }

    /// Produce the lazy sample sequence for `range`.
    ///
    /// `advance` is the injected frame-advance capability: "decode and
    /// present the next frame, then report its timestamp, or report
    /// end-of-stream". It is only consulted in
    /// [`SamplingMode::EveryFrame`] mode; fixed-step sequences are pure
    /// arithmetic. Callers driving a real decoder should treat each pull as
    /// a potentially slow, blocking operation.
    ///
    /// A closure of type `FnMut() -> Option<f64>` works directly:
    ///
    /// ```
    /// use framesample::{SamplingPlan, TimeRange};
    ///
    /// let range = TimeRange::new(0.0, 10.0)?;
    /// let plan = SamplingPlan::build(range, 5, 2.0)?;
    ///
    /// // FixedStep never pulls the source, so a dummy closure is fine.
    /// let timestamps: Vec<f64> = plan
    ///     .sequence(range, || None::<f64>)
    ///     .map(|sample| sample.timestamp)
    ///     .collect();
    /// assert_eq!(timestamps, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    /// # Ok::<(), framesample::SampleError>(())
    /// ```
    pub fn sequence<F: FrameAdvance>(&self, range: TimeRange, advance: F) -> SampleIterator<F> {
        SampleIterator::new(*self, range, advance)
    }
}
