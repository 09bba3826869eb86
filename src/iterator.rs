//! Lazy, pull-based sample sequence.
//!
//! [`SampleIterator`] implements [`Iterator`] and produces one [`Sample`] per
//! pull. In fixed-step mode the timestamps are pure arithmetic; in
//! every-frame mode each pull invokes the host-supplied [`FrameAdvance`]
//! capability, which may block on decode I/O. Either way, nothing is
//! buffered: a consumer that stops pulling has cancelled the sequence.
//!
//! Create a `SampleIterator` via [`SamplingPlan::sequence`].
//!
//! # Example
//!
//! ```
//! use framesample::{SamplingPlan, TimeRange};
//!
//! let range = TimeRange::new(10.0, 11.5)?;
//! let plan = SamplingPlan::build(range, 50, 2.0)?;
//!
//! // Stand-in for a decoder stepping 10 fps from the range start.
//! let mut clock = 10.0;
//! let samples: Vec<_> = plan
//!     .sequence(range, move || {
//!         clock += 0.1;
//!         Some(clock)
//!     })
//!     .collect();
//!
//! assert_eq!(samples.first().map(|s| s.index), Some(0));
//! assert!(samples.iter().all(|s| s.timestamp <= 11.5));
//! # Ok::<(), framesample::SampleError>(())
//! ```

use crate::plan::{Sample, SamplingMode, SamplingPlan};
use crate::range::TimeRange;

/// The injected "decode and present the next frame" capability.
///
/// Returning `Some(timestamp)` means a frame was decoded and presented at
/// that time (seconds). Returning `None` signals end-of-stream, which
/// terminates the sequence normally — it is not an error.
///
/// Timestamps are expected to be monotonically increasing but need not
/// follow any fixed delta; real decode timing is the point of every-frame
/// mode. Any `FnMut() -> Option<f64>` closure implements this trait.
pub trait FrameAdvance {
    /// Advance one frame and report its presentation time, or `None` at
    /// end-of-stream.
    fn advance(&mut self) -> Option<f64>;
}

impl<F: FnMut() -> Option<f64>> FrameAdvance for F {
    fn advance(&mut self) -> Option<f64> {
        self()
    }
}

/// A lazy iterator over planned samples.
///
/// Finite and non-restartable: once a termination condition is hit
/// (sample budget, range end, or end-of-stream) the iterator is fused and
/// keeps returning `None`.
///
/// Created via [`SamplingPlan::sequence`].
pub struct SampleIterator<F> {
    plan: SamplingPlan,
    range: TimeRange,
    advance: F,
    produced: u64,
    done: bool,
}

impl<F: FrameAdvance> SampleIterator<F> {
    pub(crate) fn new(plan: SamplingPlan, range: TimeRange, advance: F) -> Self {
        Self {
            plan,
            range,
            advance,
            produced: 0,
            done: false,
        }
    }

    fn next_fixed_step(&mut self) -> Option<f64> {
        // max_samples >= 2 is enforced at plan time, so step is present.
        let step = self.plan.step()?;
        let timestamp = self.range.start() + self.produced as f64 * step;

        if timestamp > self.range.end() {
            // The final sample lands exactly on the range end in exact
            // arithmetic; accumulated rounding can push it an ulp past.
            // Clamp within a relative tolerance, otherwise stop.
            let tolerance = self.range.duration() * 1e-9;
            if timestamp - self.range.end() > tolerance {
                return None;
            }
            return Some(self.range.end());
        }

        Some(timestamp)
    }

    fn next_every_frame(&mut self) -> Option<f64> {
        let timestamp = self.advance.advance()?;
        if timestamp > self.range.end() {
            return None;
        }
        Some(timestamp)
    }

    /// Samples left in fixed-step mode before the range end truncates.
    fn remaining_fixed(&self) -> usize {
        let Some(step) = self.plan.step() else {
            return 0;
        };
        let total = (self.range.duration() / step).floor() as u64 + 1;
        total.saturating_sub(self.produced) as usize
    }
}

impl<F: FrameAdvance> Iterator for SampleIterator<F> {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.produced >= self.plan.max_samples() {
            self.done = true;
            return None;
        }

        let timestamp = match self.plan.mode() {
            SamplingMode::FixedStep => self.next_fixed_step(),
            SamplingMode::EveryFrame => self.next_every_frame(),
        };

        match timestamp {
            Some(timestamp) => {
                let sample = Sample {
                    index: self.produced,
                    timestamp,
                };
                self.produced += 1;
                Some(sample)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.plan.max_samples() - self.produced) as usize;
        match self.plan.mode() {
            // Fixed-step length is fully determined up front.
            SamplingMode::FixedStep => (remaining.min(self.remaining_fixed()), Some(remaining)),
            // Every-frame length depends on the host; only the budget bounds it.
            SamplingMode::EveryFrame => (0, Some(remaining)),
        }
    }
}
