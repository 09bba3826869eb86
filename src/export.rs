//! Export driver.
//!
//! The driver walks a [`SamplingPlan`] and issues seek/capture commands to a
//! [`CaptureHost`] — the abstraction over whatever actually renders frames to
//! disk (a player's screenshot command, an encoder, a test double). File
//! naming, directory creation, and image encoding are the host's business;
//! the driver only decides *when* and *in what order* to ask.
//!
//! # Example
//!
//! ```
//! use framesample::{CaptureHost, Sample, SamplerOptions, TimeRange, export};
//!
//! /// Records requested timestamps instead of writing images.
//! struct Recorder {
//!     captured: Vec<f64>,
//! }
//!
//! impl CaptureHost for Recorder {
//!     fn seek(&mut self, _timestamp: f64) -> Result<(), String> {
//!         Ok(())
//!     }
//!     fn advance_frame(&mut self) -> Option<f64> {
//!         None
//!     }
//!     fn capture(&mut self, sample: &Sample) -> Result<(), String> {
//!         self.captured.push(sample.timestamp);
//!         Ok(())
//!     }
//! }
//!
//! let mut host = Recorder { captured: Vec::new() };
//! let range = TimeRange::new(0.0, 10.0)?;
//! let options = SamplerOptions::new().with_max_samples(5);
//!
//! let captured = export::export_with_options(&mut host, range, &options)?;
//! assert_eq!(captured, 5);
//! assert_eq!(host.captured, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
//! # Ok::<(), framesample::SampleError>(())
//! ```

use crate::config::SamplerOptions;
use crate::error::SampleError;
use crate::plan::{Sample, SamplingMode};
use crate::progress::{OperationType, ProgressTracker};
use crate::range::TimeRange;

/// The host-side commands an export drives.
///
/// Methods map onto a media player's scripting surface: `seek` positions the
/// playhead, `advance_frame` steps one decoded frame forward and reports the
/// resulting presentation time (or `None` at end-of-stream), and `capture`
/// persists the frame currently presented.
///
/// Host failures are reported as plain strings; the driver wraps them with
/// sample context into [`SampleError::SeekFailed`] /
/// [`SampleError::CaptureFailed`].
pub trait CaptureHost {
    /// Position the playhead at `timestamp` seconds.
    fn seek(&mut self, timestamp: f64) -> Result<(), String>;

    /// Decode and present the next frame, reporting its presentation time.
    ///
    /// `None` signals end-of-stream. May block on decode I/O with no
    /// guaranteed latency bound.
    fn advance_frame(&mut self) -> Option<f64>;

    /// Persist the currently presented frame for `sample`.
    fn capture(&mut self, sample: &Sample) -> Result<(), String>;
}

/// Export `range` through `host` with default [`SamplerOptions`].
///
/// See [`export_with_options`].
///
/// # Errors
///
/// Same as [`export_with_options`].
pub fn export<H: CaptureHost>(host: &mut H, range: TimeRange) -> Result<u64, SampleError> {
    export_with_options(host, range, &SamplerOptions::new())
}

/// Export `range` through `host`, returning the number of samples captured.
///
/// Plans the range with `options`, then drives the host:
///
/// - **Fixed-step**: seeks to each planned timestamp and captures there.
/// - **Every-frame**: seeks to the range start once, then alternates
///   `advance_frame` / `capture` until end-of-stream, the range end, or the
///   sample budget stops it.
///
/// Cancellation is checked before each sample; progress is reported at the
/// cadence configured on `options`.
///
/// # Errors
///
/// - [`SampleError::InvalidOptions`] if `options` fail plan validation.
/// - [`SampleError::SeekFailed`] / [`SampleError::CaptureFailed`] wrapping
///   host failures.
/// - [`SampleError::Cancelled`] if the cancellation token fires.
pub fn export_with_options<H: CaptureHost>(
    host: &mut H,
    range: TimeRange,
    options: &SamplerOptions,
) -> Result<u64, SampleError> {
    let plan = options.plan(range)?;

    log::debug!(
        "Export: {:.3}s..{:.3}s mode={:?} budget={}",
        range.start(),
        range.end(),
        plan.mode(),
        plan.max_samples(),
    );

    let captured = match plan.mode() {
        SamplingMode::FixedStep => {
            let mut tracker = ProgressTracker::new(
                options.progress.clone(),
                OperationType::FixedStepCapture,
                Some(plan.max_samples()),
                options.batch_size,
            );

            let mut captured = 0_u64;
            for sample in plan.sequence(range, || None::<f64>) {
                if options.is_cancelled() {
                    return Err(SampleError::Cancelled);
                }

                host.seek(sample.timestamp)
                    .map_err(|reason| SampleError::SeekFailed {
                        timestamp: sample.timestamp,
                        reason,
                    })?;
                capture_one(host, &sample)?;

                captured += 1;
                tracker.advance(Some(sample.timestamp));
            }
            tracker.finish();
            captured
        }
        SamplingMode::EveryFrame => {
            // Length depends on the host's decode cadence, so no total.
            let mut tracker = ProgressTracker::new(
                options.progress.clone(),
                OperationType::EveryFrameCapture,
                None,
                options.batch_size,
            );

            host.seek(range.start())
                .map_err(|reason| SampleError::SeekFailed {
                    timestamp: range.start(),
                    reason,
                })?;

            let mut captured = 0_u64;
            while captured < plan.max_samples() {
                if options.is_cancelled() {
                    return Err(SampleError::Cancelled);
                }

                let Some(timestamp) = host.advance_frame() else {
                    break;
                };
                if timestamp > range.end() {
                    break;
                }

                let sample = Sample {
                    index: captured,
                    timestamp,
                };
                capture_one(host, &sample)?;

                captured += 1;
                tracker.advance(Some(timestamp));
            }
            tracker.finish();
            captured
        }
    };

    log::info!(
        "Export finished: {captured} sample(s) from {:.3}s..{:.3}s",
        range.start(),
        range.end(),
    );

    Ok(captured)
}

fn capture_one<H: CaptureHost>(host: &mut H, sample: &Sample) -> Result<(), SampleError> {
    host.capture(sample)
        .map_err(|reason| SampleError::CaptureFailed {
            index: sample.index,
            timestamp: sample.timestamp,
            reason,
        })
}
