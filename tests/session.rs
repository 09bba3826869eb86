//! Capture session state machine tests.

use framesample::{
    CaptureHost, CaptureSession, Sample, SampleError, SamplerOptions, SessionState,
};

// ── Transitions ────────────────────────────────────────────────────

#[test]
fn new_session_is_idle() {
    let session = CaptureSession::new();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.start().is_none());
    assert!(session.end().is_none());
    assert!(session.range().is_none());
}

#[test]
fn mark_start_moves_to_has_start() {
    let mut session = CaptureSession::new();
    session.mark_start(10.0).unwrap();

    assert_eq!(session.state(), SessionState::HasStart);
    assert_eq!(session.start(), Some(10.0));
    assert!(session.range().is_none());
}

#[test]
fn mark_end_moves_to_ready() {
    let mut session = CaptureSession::new();
    session.mark_start(10.0).unwrap();
    session.mark_end(11.5).unwrap();

    assert_eq!(session.state(), SessionState::Ready);
    let range = session.range().unwrap();
    assert_eq!(range.start(), 10.0);
    assert_eq!(range.end(), 11.5);
}

#[test]
fn take_range_resets_to_idle() {
    let mut session = CaptureSession::new();
    session.mark_start(1.0).unwrap();
    session.mark_end(2.0).unwrap();

    let range = session.take_range().unwrap();
    assert_eq!(range.duration(), 1.0);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.take_range().is_none());
}

#[test]
fn take_range_before_ready_returns_none_and_keeps_marks() {
    let mut session = CaptureSession::new();
    session.mark_start(5.0).unwrap();

    assert!(session.take_range().is_none());
    assert_eq!(session.state(), SessionState::HasStart);
    assert_eq!(session.start(), Some(5.0));
}

#[test]
fn clear_returns_to_idle() {
    let mut session = CaptureSession::new();
    session.mark_start(1.0).unwrap();
    session.mark_end(2.0).unwrap();
    session.clear();

    assert_eq!(session.state(), SessionState::Idle);
}

// ── Mark rules ─────────────────────────────────────────────────────

#[test]
fn remarking_start_clears_a_recorded_end() {
    let mut session = CaptureSession::new();
    session.mark_start(10.0).unwrap();
    session.mark_end(20.0).unwrap();
    assert_eq!(session.state(), SessionState::Ready);

    session.mark_start(15.0).unwrap();
    assert_eq!(session.state(), SessionState::HasStart);
    assert_eq!(session.start(), Some(15.0));
    assert!(session.end().is_none());
}

#[test]
fn mark_end_without_start_is_rejected() {
    let mut session = CaptureSession::new();
    let result = session.mark_end(5.0);

    assert!(matches!(result, Err(SampleError::InvalidRange { .. })));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn mark_end_at_or_before_start_is_rejected_and_state_unchanged() {
    let mut session = CaptureSession::new();
    session.mark_start(10.0).unwrap();

    assert!(session.mark_end(10.0).is_err());
    assert!(session.mark_end(9.0).is_err());
    assert_eq!(session.state(), SessionState::HasStart);
    assert!(session.end().is_none());

    // A rejected end must not clobber an already-recorded valid end.
    session.mark_end(12.0).unwrap();
    assert!(session.mark_end(10.0).is_err());
    assert_eq!(session.end(), Some(12.0));
}

#[test]
fn mark_start_rejects_invalid_timestamps() {
    let mut session = CaptureSession::new();
    assert!(session.mark_start(-1.0).is_err());
    assert!(session.mark_start(f64::NAN).is_err());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn mark_end_rejects_non_finite_timestamps() {
    let mut session = CaptureSession::new();
    session.mark_start(0.0).unwrap();
    assert!(session.mark_end(f64::INFINITY).is_err());
    assert_eq!(session.state(), SessionState::HasStart);
}

// ── Export integration ─────────────────────────────────────────────

struct CountingHost {
    captured: u64,
}

impl CaptureHost for CountingHost {
    fn seek(&mut self, _timestamp: f64) -> Result<(), String> {
        Ok(())
    }
    fn advance_frame(&mut self) -> Option<f64> {
        None
    }
    fn capture(&mut self, _sample: &Sample) -> Result<(), String> {
        self.captured += 1;
        Ok(())
    }
}

#[test]
fn export_consumes_the_session() {
    let mut session = CaptureSession::new();
    session.mark_start(0.0).unwrap();
    session.mark_end(10.0).unwrap();

    let mut host = CountingHost { captured: 0 };
    let options = SamplerOptions::new().with_max_samples(5);
    let captured = session.export(&mut host, &options).unwrap();

    assert_eq!(captured, 5);
    assert_eq!(host.captured, 5);
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn export_before_ready_is_rejected() {
    let mut session = CaptureSession::new();
    session.mark_start(3.0).unwrap();

    let mut host = CountingHost { captured: 0 };
    let result = session.export(&mut host, &SamplerOptions::new());

    assert!(matches!(result, Err(SampleError::InvalidRange { .. })));
    assert_eq!(host.captured, 0);
    // Marks survive a rejected export.
    assert_eq!(session.state(), SessionState::HasStart);
}
