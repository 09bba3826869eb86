//! Sampler configuration.
//!
//! [`SamplerOptions`] is a builder that threads the sampling knobs, progress
//! callbacks, and cancellation tokens through planning and export without
//! polluting every function signature.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use framesample::{CancellationToken, ProgressCallback, ProgressInfo, SamplerOptions};
//!
//! struct LogProgress;
//! impl ProgressCallback for LogProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         println!("{:?}: {} done", info.operation, info.current);
//!     }
//! }
//!
//! let token = CancellationToken::new();
//! let options = SamplerOptions::new()
//!     .with_max_samples(50)
//!     .with_short_threshold(2.0)
//!     .with_progress(Arc::new(LogProgress))
//!     .with_cancellation(token.clone())
//!     .with_batch_size(10);
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::error::SampleError;
use crate::plan::SamplingPlan;
use crate::progress::{CancellationToken, NoOpProgress, ProgressCallback};
use crate::range::TimeRange;

/// Default maximum number of samples per export.
pub const DEFAULT_MAX_SAMPLES: u64 = 100;

/// Default short-range threshold, in seconds.
///
/// Ranges at or under this length are captured frame by frame instead of by
/// seeking to computed timestamps.
pub const DEFAULT_SHORT_THRESHOLD: f64 = 2.0;

/// Configuration for sampling and export operations.
///
/// Carries the planning knobs plus optional progress- and
/// cancellation-related settings. All fields have sensible defaults — a
/// default-constructed value plans up to [`DEFAULT_MAX_SAMPLES`] samples
/// with a [`DEFAULT_SHORT_THRESHOLD`]-second short-range threshold.
#[derive(Clone)]
#[must_use]
pub struct SamplerOptions {
    /// Upper bound on samples per export.
    pub(crate) max_samples: u64,
    /// Ranges no longer than this (seconds) are sampled frame by frame.
    pub(crate) short_threshold: f64,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
    /// Cancellation token. `None` means never cancelled.
    pub(crate) cancellation: Option<CancellationToken>,
    /// How often to fire the progress callback (every N samples).
    /// Defaults to 1 (every sample).
    pub(crate) batch_size: u64,
}

impl Debug for SamplerOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SamplerOptions")
            .field("max_samples", &self.max_samples)
            .field("short_threshold", &self.short_threshold)
            .field("has_cancellation", &self.cancellation.is_some())
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplerOptions {
    /// Create a new configuration with default settings.
    ///
    /// Defaults: 100 samples maximum, 2-second short-range threshold, no
    /// progress callback, no cancellation, batch size 1.
    pub fn new() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            short_threshold: DEFAULT_SHORT_THRESHOLD,
            progress: Arc::new(NoOpProgress),
            cancellation: None,
            batch_size: 1,
        }
    }

    /// Set the maximum number of samples per export.
    ///
    /// Values below 2 are rejected when a plan is built — a single sample
    /// cannot span a range.
    pub fn with_max_samples(mut self, max_samples: u64) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Set the short-range threshold in seconds.
    ///
    /// Ranges no longer than this are captured frame by frame. Must be
    /// positive; validated when a plan is built.
    pub fn with_short_threshold(mut self, seconds: f64) -> Self {
        self.short_threshold = seconds;
        self
    }

    /// Attach a progress callback.
    ///
    /// The callback is invoked every
    /// [`batch_size`](SamplerOptions::with_batch_size) samples during export.
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }

    /// Attach a cancellation token.
    ///
    /// When the token is cancelled, the export loop stops and returns
    /// [`SampleError::Cancelled`](crate::SampleError::Cancelled).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Set how often the progress callback fires.
    ///
    /// A value of 1 means every sample; 10 means every 10th sample.
    /// Clamped to a minimum of 1.
    pub fn with_batch_size(mut self, size: u64) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Build a [`SamplingPlan`] for `range` using these options.
    ///
    /// Equivalent to
    /// [`SamplingPlan::build(range, max_samples, short_threshold)`](SamplingPlan::build).
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidOptions`] if the options fail
    /// validation.
    pub fn plan(&self, range: TimeRange) -> Result<SamplingPlan, SampleError> {
        SamplingPlan::build(range, self.max_samples, self.short_threshold)
    }

    /// Returns `true` if cancellation has been requested.
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
