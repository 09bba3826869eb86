//! Capture sessions.
//!
//! [`CaptureSession`] is the two-timestamp state machine a host drives while
//! the user marks the bounds of an export:
//!
//! ```text
//! Idle ──mark_start──▶ HasStart ──mark_end (end > start)──▶ Ready
//!   ▲                                                          │
//!   └───────────────────── take_range / export ────────────────┘
//! ```
//!
//! The session is an explicit value owned by the caller — it replaces the
//! global mutable timestamps an embedded player script would keep, and holds
//! nothing but the two marks.
//!
//! # Example
//!
//! ```
//! use framesample::CaptureSession;
//!
//! let mut session = CaptureSession::new();
//! session.mark_start(10.0)?;
//! session.mark_end(11.5)?;
//!
//! let range = session.take_range().unwrap();
//! assert_eq!(range.duration(), 1.5);
//! assert!(session.take_range().is_none()); // back to Idle
//! # Ok::<(), framesample::SampleError>(())
//! ```

use crate::config::SamplerOptions;
use crate::error::SampleError;
use crate::export::{self, CaptureHost};
use crate::range::TimeRange;

/// Where a session is in the mark-start / mark-end flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No marks recorded.
    Idle,
    /// A start mark is recorded; no valid end yet.
    HasStart,
    /// Both marks recorded and `end > start`; the range can be taken.
    Ready,
}

/// The mark-start / mark-end capture state machine.
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    start: Option<f64>,
    end: Option<f64>,
}

impl CaptureSession {
    /// Create a new session in the [`SessionState::Idle`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state of the session.
    pub fn state(&self) -> SessionState {
        match (self.start, self.end) {
            (None, _) => SessionState::Idle,
            (Some(_), None) => SessionState::HasStart,
            (Some(_), Some(_)) => SessionState::Ready,
        }
    }

    /// The recorded start mark, in seconds.
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// The recorded end mark, in seconds.
    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// Record the start mark.
    ///
    /// Any previously recorded end is cleared: a kept end would either be
    /// invalidated by the new start or silently pair two marks the user
    /// never chose together. The session moves to [`SessionState::HasStart`].
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] if `timestamp` is negative or
    /// not finite; the session is left unchanged.
    pub fn mark_start(&mut self, timestamp: f64) -> Result<(), SampleError> {
        if !timestamp.is_finite() || timestamp < 0.0 {
            return Err(SampleError::InvalidRange {
                start: timestamp,
                end: timestamp,
            });
        }
        log::debug!("Session: start mark at {timestamp:.3}s (end cleared)");
        self.start = Some(timestamp);
        self.end = None;
        Ok(())
    }

    /// Record the end mark.
    ///
    /// Rejected unless a start is recorded and `timestamp` is strictly
    /// after it; on rejection the session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] carrying the offending pair of
    /// timestamps.
    pub fn mark_end(&mut self, timestamp: f64) -> Result<(), SampleError> {
        let start = self.start.ok_or(SampleError::InvalidRange {
            start: timestamp,
            end: timestamp,
        })?;
        if !timestamp.is_finite() || timestamp <= start {
            return Err(SampleError::InvalidRange {
                start,
                end: timestamp,
            });
        }
        log::debug!("Session: end mark at {timestamp:.3}s");
        self.end = Some(timestamp);
        Ok(())
    }

    /// The marked range, if the session is [`SessionState::Ready`].
    ///
    /// Does not consume the marks; use [`take_range`](CaptureSession::take_range)
    /// to finish the session.
    pub fn range(&self) -> Option<TimeRange> {
        match (self.start, self.end) {
            // Marks are validated on entry, so construction cannot fail.
            (Some(start), Some(end)) => TimeRange::new(start, end).ok(),
            _ => None,
        }
    }

    /// Take the marked range and reset the session to [`SessionState::Idle`].
    ///
    /// Returns `None` unless the session is [`SessionState::Ready`], in
    /// which case the marks are left untouched.
    pub fn take_range(&mut self) -> Option<TimeRange> {
        let range = self.range()?;
        self.start = None;
        self.end = None;
        Some(range)
    }

    /// Discard any recorded marks and return to [`SessionState::Idle`].
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Export the marked range through `host` and reset the session.
    ///
    /// Convenience for [`take_range`](CaptureSession::take_range) followed by
    /// [`export::export_with_options`]. Returns the number of samples
    /// captured.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidRange`] if the session is not
    /// [`SessionState::Ready`] (the marks, if any, are kept), or any error
    /// from the export itself.
    pub fn export<H: CaptureHost>(
        &mut self,
        host: &mut H,
        options: &SamplerOptions,
    ) -> Result<u64, SampleError> {
        let range = self.take_range().ok_or(SampleError::InvalidRange {
            start: self.start.unwrap_or(0.0),
            end: self.end.unwrap_or(0.0),
        })?;
        export::export_with_options(host, range, options)
    }
}
