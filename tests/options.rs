//! SamplerOptions builder tests.

use std::sync::Arc;

use framesample::{
    ProgressCallback, ProgressInfo, SampleError, SamplerOptions, SamplingMode, TimeRange,
    DEFAULT_MAX_SAMPLES, DEFAULT_SHORT_THRESHOLD,
};

// ── Builder defaults ───────────────────────────────────────────────

#[test]
fn options_defaults() {
    let options = SamplerOptions::new();
    let debug = format!("{options:?}");
    assert!(debug.contains("SamplerOptions"));
    assert!(debug.contains("has_cancellation: false"));
    assert!(debug.contains("batch_size: 1"));
    assert!(debug.contains(&format!("max_samples: {DEFAULT_MAX_SAMPLES}")));
}

#[test]
fn options_default_trait_matches_new() {
    let debug_new = format!("{:?}", SamplerOptions::new());
    let debug_default = format!("{:?}", SamplerOptions::default());
    assert_eq!(debug_new, debug_default);
}

#[test]
fn options_with_batch_size() {
    let options = SamplerOptions::new().with_batch_size(10);
    let debug = format!("{options:?}");
    assert!(debug.contains("batch_size: 10"));
}

#[test]
fn options_with_batch_size_clamps_zero() {
    let options = SamplerOptions::new().with_batch_size(0);
    let debug = format!("{options:?}");
    // Clamped to 1.
    assert!(debug.contains("batch_size: 1"));
}

#[test]
fn options_with_cancellation_shows_in_debug() {
    let options = SamplerOptions::new().with_cancellation(framesample::CancellationToken::new());
    let debug = format!("{options:?}");
    assert!(debug.contains("has_cancellation: true"));
}

#[test]
fn options_with_progress_is_accepted() {
    struct Silent;
    impl ProgressCallback for Silent {
        fn on_progress(&self, _info: &ProgressInfo) {}
    }
    let _options = SamplerOptions::new().with_progress(Arc::new(Silent));
}

// ── Planning through options ───────────────────────────────────────

#[test]
fn default_options_plan_a_long_range_as_fixed_step() {
    let range = TimeRange::new(0.0, 60.0).unwrap();
    let plan = SamplerOptions::new().plan(range).unwrap();

    assert_eq!(plan.mode(), SamplingMode::FixedStep);
    assert_eq!(plan.max_samples(), DEFAULT_MAX_SAMPLES);
    let expected_step = 60.0 / (DEFAULT_MAX_SAMPLES - 1) as f64;
    assert!((plan.step().unwrap() - expected_step).abs() < 1e-12);
}

#[test]
fn default_threshold_is_two_seconds() {
    assert_eq!(DEFAULT_SHORT_THRESHOLD, 2.0);

    let range = TimeRange::new(0.0, 1.9).unwrap();
    let plan = SamplerOptions::new().plan(range).unwrap();
    assert_eq!(plan.mode(), SamplingMode::EveryFrame);
}

#[test]
fn custom_knobs_flow_into_the_plan() {
    let range = TimeRange::new(0.0, 10.0).unwrap();
    let plan = SamplerOptions::new()
        .with_max_samples(50)
        .with_short_threshold(2.0)
        .plan(range)
        .unwrap();

    assert_eq!(plan.mode(), SamplingMode::FixedStep);
    assert_eq!(plan.max_samples(), 50);
}

#[test]
fn a_large_threshold_forces_every_frame() {
    let range = TimeRange::new(0.0, 10.0).unwrap();
    let plan = SamplerOptions::new()
        .with_short_threshold(60.0)
        .plan(range)
        .unwrap();

    assert_eq!(plan.mode(), SamplingMode::EveryFrame);
}

#[test]
fn invalid_knobs_are_rejected_at_plan_time() {
    let range = TimeRange::new(0.0, 10.0).unwrap();

    let result = SamplerOptions::new().with_max_samples(1).plan(range);
    assert!(matches!(result, Err(SampleError::InvalidOptions { .. })));

    let result = SamplerOptions::new().with_short_threshold(-2.0).plan(range);
    assert!(matches!(result, Err(SampleError::InvalidOptions { .. })));
}
