//! Sample sequence tests: fixed-step arithmetic and every-frame pulls.

use framesample::{Sample, SamplingMode, SamplingPlan, TimeRange};

fn collect(plan: &SamplingPlan, range: TimeRange) -> Vec<Sample> {
    plan.sequence(range, || None::<f64>).collect()
}

// ── FixedStep ──────────────────────────────────────────────────────

#[test]
fn fixed_step_spans_the_range_exactly() {
    let range = TimeRange::new(0.0, 10.0).unwrap();
    let plan = SamplingPlan::build(range, 5, 2.0).unwrap();

    let timestamps: Vec<f64> = collect(&plan, range).iter().map(|s| s.timestamp).collect();
    assert_eq!(timestamps, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn fixed_step_uses_full_budget_on_awkward_steps() {
    // 10/49 is not representable exactly; the final sample must still land
    // on the range end rather than fall off it.
    let range = TimeRange::new(0.0, 10.0).unwrap();
    let plan = SamplingPlan::build(range, 50, 2.0).unwrap();

    let samples = collect(&plan, range);
    assert_eq!(samples.len(), 50);
    assert_eq!(samples[0].timestamp, 0.0);
    assert!(samples[49].timestamp <= 10.0);
    assert!(samples[49].timestamp > 9.99);
}

#[test]
fn fixed_step_is_strictly_increasing_and_in_range() {
    let range = TimeRange::new(3.0, 47.0).unwrap();
    let plan = SamplingPlan::build(range, 17, 2.0).unwrap();

    let samples = collect(&plan, range);
    for pair in samples.windows(2) {
        assert!(pair[1].timestamp > pair[0].timestamp);
    }
    for sample in &samples {
        assert!(range.contains(sample.timestamp), "{} out of range", sample.timestamp);
    }
}

#[test]
fn fixed_step_indices_are_monotonic_from_zero() {
    let range = TimeRange::new(0.0, 30.0).unwrap();
    let plan = SamplingPlan::build(range, 7, 2.0).unwrap();

    let samples = collect(&plan, range);
    for (expected, sample) in samples.iter().enumerate() {
        assert_eq!(sample.index, expected as u64);
    }
}

#[test]
fn fixed_step_ignores_the_frame_source() {
    let range = TimeRange::new(0.0, 10.0).unwrap();
    let plan = SamplingPlan::build(range, 5, 2.0).unwrap();

    let mut pulls = 0;
    let samples: Vec<Sample> = plan
        .sequence(range, || {
            pulls += 1;
            Some(0.0)
        })
        .collect();

    assert_eq!(samples.len(), 5);
    assert_eq!(pulls, 0, "fixed-step sequences must not pull the source");
}

#[test]
fn fixed_step_sequence_is_fused() {
    let range = TimeRange::new(0.0, 10.0).unwrap();
    let plan = SamplingPlan::build(range, 3, 2.0).unwrap();

    let mut sequence = plan.sequence(range, || None::<f64>);
    assert_eq!(sequence.by_ref().count(), 3);
    assert!(sequence.next().is_none());
    assert!(sequence.next().is_none());
}

// ── EveryFrame ─────────────────────────────────────────────────────

#[test]
fn every_frame_pulls_until_range_end() {
    let range = TimeRange::new(10.0, 11.5).unwrap();
    let plan = SamplingPlan::build(range, 50, 2.0).unwrap();
    assert_eq!(plan.mode(), SamplingMode::EveryFrame);

    // 10 fps decode clock starting at the range start.
    let mut clock = 10.0;
    let samples: Vec<Sample> = plan
        .sequence(range, move || {
            clock += 0.1;
            Some(clock)
        })
        .collect();

    // Frames at 10.1, 10.2, ... 11.5 — the next pull (11.6) is past the end.
    assert_eq!(samples.len(), 14);
    assert!(samples.iter().all(|s| s.timestamp <= 11.5));
    for pair in samples.windows(2) {
        assert!(pair[1].timestamp > pair[0].timestamp);
    }
}

#[test]
fn every_frame_respects_the_sample_budget() {
    let range = TimeRange::new(0.0, 1.0).unwrap();
    let plan = SamplingPlan::build(range, 5, 2.0).unwrap();

    let mut clock = 0.0;
    let samples: Vec<Sample> = plan
        .sequence(range, move || {
            clock += 0.001;
            Some(clock)
        })
        .collect();

    assert_eq!(samples.len(), 5);
}

#[test]
fn every_frame_terminates_on_end_of_stream() {
    let range = TimeRange::new(0.0, 1.0).unwrap();
    let plan = SamplingPlan::build(range, 50, 2.0).unwrap();

    // Source dries up after three frames.
    let mut frames = vec![0.1, 0.2, 0.3].into_iter();
    let samples: Vec<Sample> = plan.sequence(range, move || frames.next()).collect();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[2].timestamp, 0.3);
}

#[test]
fn every_frame_handles_immediate_end_of_stream() {
    let range = TimeRange::new(0.0, 1.0).unwrap();
    let plan = SamplingPlan::build(range, 50, 2.0).unwrap();

    let samples: Vec<Sample> = plan.sequence(range, || None::<f64>).collect();
    assert!(samples.is_empty());
}

#[test]
fn every_frame_timestamps_follow_the_source_not_a_fixed_delta() {
    // Decode timing is uneven on purpose; sampled times must match it.
    let range = TimeRange::new(0.0, 1.0).unwrap();
    let plan = SamplingPlan::build(range, 50, 2.0).unwrap();

    let mut frames = vec![0.03, 0.07, 0.2, 0.95].into_iter();
    let timestamps: Vec<f64> = plan
        .sequence(range, move || frames.next())
        .map(|s| s.timestamp)
        .collect();

    assert_eq!(timestamps, vec![0.03, 0.07, 0.2, 0.95]);
}

#[test]
fn every_frame_indices_are_monotonic_from_zero() {
    let range = TimeRange::new(0.0, 1.0).unwrap();
    let plan = SamplingPlan::build(range, 50, 2.0).unwrap();

    let mut frames = vec![0.1, 0.2, 0.3, 0.4].into_iter();
    let samples: Vec<Sample> = plan.sequence(range, move || frames.next()).collect();

    let indices: Vec<u64> = samples.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}
