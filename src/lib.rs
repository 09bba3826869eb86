//! # framesample
//!
//! Plan bounded frame-sampling schedules over video time ranges and drive a
//! host's seek/capture commands through them.
//!
//! `framesample` answers one question — *which timestamps should be captured
//! from this range, given a sample budget?* — and provides the glue a real
//! host (a media player, a decoder harness, a test double) needs to act on
//! the answer. It never decodes video itself: decoding is injected as the
//! [`FrameAdvance`] capability and actual image export as the
//! [`CaptureHost`] trait.
//!
//! ## Quick Start
//!
//! ### Plan a range
//!
//! ```
//! use framesample::{SamplingMode, SamplingPlan, TimeRange};
//!
//! let range = TimeRange::new(0.0, 10.0)?;
//! let plan = SamplingPlan::build(range, 50, 2.0)?;
//!
//! // A 10 s range with a 2 s threshold gets 50 evenly spaced samples.
//! assert_eq!(plan.mode(), SamplingMode::FixedStep);
//! # Ok::<(), framesample::SampleError>(())
//! ```
//!
//! ### Walk the schedule
//!
//! ```
//! use framesample::{SamplingPlan, TimeRange};
//!
//! let range = TimeRange::new(0.0, 10.0)?;
//! let plan = SamplingPlan::build(range, 5, 2.0)?;
//!
//! for sample in plan.sequence(range, || None::<f64>) {
//!     println!("capture #{} at {:.3}s", sample.index, sample.timestamp);
//! }
//! # Ok::<(), framesample::SampleError>(())
//! ```
//!
//! ### Mark bounds interactively, then export
//!
//! ```
//! use framesample::{CaptureHost, CaptureSession, Sample, SamplerOptions};
//!
//! struct NullHost;
//! impl CaptureHost for NullHost {
//!     fn seek(&mut self, _timestamp: f64) -> Result<(), String> { Ok(()) }
//!     fn advance_frame(&mut self) -> Option<f64> { None }
//!     fn capture(&mut self, _sample: &Sample) -> Result<(), String> { Ok(()) }
//! }
//!
//! let mut session = CaptureSession::new();
//! session.mark_start(12.0)?;
//! session.mark_end(47.0)?;
//!
//! let captured = session.export(&mut NullHost, &SamplerOptions::new())?;
//! assert_eq!(captured, 100);
//! # Ok::<(), framesample::SampleError>(())
//! ```
//!
//! ## Sampling modes
//!
//! - **Fixed step** — for ranges longer than the short-range threshold, the
//!   budget is spread evenly: `step = duration / (max_samples - 1)`, first
//!   sample at the range start, last at the range end.
//! - **Every frame** — for short ranges, seeking between computed timestamps
//!   would skip or duplicate frames, so the host steps one decoded frame at
//!   a time and every presented frame is captured. The sampled timestamps
//!   follow real decode timing, not a fixed delta.
//!
//! ## Features
//!
//! - **Lazy sequences** — [`SampleIterator`] produces samples on demand;
//!   stop pulling and the remainder is never computed.
//! - **Capture sessions** — [`CaptureSession`] holds the mark-start /
//!   mark-end state machine an interactive host drives.
//! - **Export driver** — [`export::export_with_options`] sequences a host's
//!   seek/capture commands over a planned schedule.
//! - **Progress & cancellation** — cooperative callbacks and
//!   [`CancellationToken`] for long-running captures.

pub mod config;
pub mod error;
pub mod export;
pub mod iterator;
pub mod plan;
pub mod progress;
pub mod range;
pub mod session;

pub use config::{DEFAULT_MAX_SAMPLES, DEFAULT_SHORT_THRESHOLD, SamplerOptions};
pub use error::SampleError;
pub use export::CaptureHost;
pub use iterator::{FrameAdvance, SampleIterator};
pub use plan::{Sample, SamplingMode, SamplingPlan};
pub use progress::{CancellationToken, OperationType, ProgressCallback, ProgressInfo};
pub use range::TimeRange;
pub use session::{CaptureSession, SessionState};
