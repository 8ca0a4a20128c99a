// Host-side tests for the frame-rate meter and performance grading.

use tracefork_core::constants::FRAME_WINDOW;
use tracefork_core::{
    CognitivePatch, CognitiveStateStore, FrameRateMeter, PerformanceGrade, SystemMetrics,
};

#[test]
fn meter_reports_once_per_window() {
    let mut meter = FrameRateMeter::new();
    let frame_ms = 1000.0 / 60.0;
    let mut reports = Vec::new();
    // first call only establishes the baseline
    for i in 0..=(FRAME_WINDOW * 2) {
        if let Some(patch) = meter.frame(i as f64 * frame_ms) {
            reports.push(patch);
        }
    }
    assert_eq!(reports.len(), 2);
    for r in &reports {
        assert_eq!(r.fps, Some(60.0));
        assert!(r.memory_mb.is_none());
    }
    assert_eq!(meter.last_fps(), Some(60.0));
}

#[test]
fn meter_tracks_slow_frames() {
    let mut meter = FrameRateMeter::new();
    let mut last = None;
    for i in 0..=FRAME_WINDOW {
        last = meter.frame(i as f64 * 40.0).or(last);
    }
    assert_eq!(last.and_then(|p| p.fps), Some(25.0));
}

#[test]
fn meter_ignores_non_advancing_frames() {
    let mut meter = FrameRateMeter::new();
    meter.frame(100.0);
    assert!(meter.frame(100.0).is_none());
    assert!(meter.frame(50.0).is_none());
    assert!(meter.last_fps().is_none());
}

#[test]
fn fps_grades() {
    assert_eq!(PerformanceGrade::from_fps(60.0), PerformanceGrade::Excellent);
    assert_eq!(PerformanceGrade::from_fps(55.0), PerformanceGrade::Good);
    assert_eq!(PerformanceGrade::from_fps(45.0), PerformanceGrade::Acceptable);
    assert_eq!(PerformanceGrade::from_fps(30.0), PerformanceGrade::Poor);
    assert_eq!(PerformanceGrade::from_fps(12.0), PerformanceGrade::Critical);
}

#[test]
fn memory_grades() {
    assert_eq!(PerformanceGrade::from_memory_mb(50.0), PerformanceGrade::Excellent);
    assert_eq!(PerformanceGrade::from_memory_mb(600.0), PerformanceGrade::Poor);
    assert_eq!(PerformanceGrade::from_memory_mb(2048.0), PerformanceGrade::Critical);
}

#[test]
fn overall_grade_is_the_worse_of_fps_and_memory() {
    let mut m = SystemMetrics::default();
    assert_eq!(PerformanceGrade::of(&m), PerformanceGrade::Excellent);
    m.memory_mb = 600.0;
    assert_eq!(PerformanceGrade::of(&m), PerformanceGrade::Poor);
    m.fps = 12.0;
    assert_eq!(PerformanceGrade::of(&m), PerformanceGrade::Critical);
    // unknown heap usage does not count against the grade
    m.fps = 45.0;
    m.memory_mb = 0.0;
    assert_eq!(PerformanceGrade::of(&m), PerformanceGrade::Acceptable);
}

#[test]
fn cognitive_merge_is_shallow() {
    let mut store = CognitiveStateStore::new();
    store.update_cognitive(&CognitivePatch {
        entropy: Some(0.9),
        ..CognitivePatch::default()
    });
    let c = store.cognitive();
    assert_eq!(c.entropy, 0.9);
    assert_eq!(c.coherence, 0.8);
    // no range validation in the store
    store.update_cognitive(&CognitivePatch {
        intensity: Some(7.5),
        ..CognitivePatch::default()
    });
    assert_eq!(store.cognitive().intensity, 7.5);
    assert_eq!(store.cognitive().entropy, 0.9);
}
