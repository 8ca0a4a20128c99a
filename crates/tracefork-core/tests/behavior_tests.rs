// Host-side tests for behavioural signal derivation.

use rand::prelude::*;
use tracefork_core::{
    BehaviorSignalAggregator, BehavioralSignals, EngagementLevel, ExplorationLevel, IntentLevel,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn defaults_match_initial_signal_values() {
    let agg = BehaviorSignalAggregator::new();
    let s = agg.signals();
    assert_eq!(s.intent_clarity, 0.5);
    assert_eq!(s.exploration, 0.3);
    assert_eq!(s.rhythm, 0.6);
    assert_eq!(s.hesitation, 0.2);
    assert_eq!(s.engagement, 0.7);
}

#[test]
fn six_recent_clicks_saturate_intent() {
    let mut agg = BehaviorSignalAggregator::new();
    for i in 0..6 {
        agg.track_click(10.0, 10.0, "nav", 1000.0 + i as f64 * 200.0);
    }
    assert_eq!(agg.signals().intent_clarity, 1.0);
}

#[test]
fn two_recent_clicks_give_point_four() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_click(0.0, 0.0, "a", 1000.0);
    agg.track_click(0.0, 0.0, "b", 2000.0);
    assert!(approx(agg.signals().intent_clarity, 0.4));
}

#[test]
fn clicks_older_than_five_seconds_do_not_count() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_click(0.0, 0.0, "old", 0.0);
    agg.track_click(0.0, 0.0, "old", 100.0);
    agg.track_click(0.0, 0.0, "new", 5050.0);
    // Only the click at 100 ms (4950 ms ago) and the new one are inside the window
    assert!(approx(agg.signals().intent_clarity, 0.4));

    // Exactly 5000 ms old is outside (strict comparison)
    agg.track_click(0.0, 0.0, "new", 5100.0);
    assert!(approx(agg.signals().intent_clarity, 0.4));
}

#[test]
fn rhythm_is_mean_absolute_delta_over_hundred() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_scroll(0.0, 40.0, 0.0);
    agg.track_scroll(40.0, -20.0, 10.0);
    assert!(approx(agg.signals().rhythm, 0.3));
    agg.track_scroll(60.0, 1000.0, 20.0);
    assert_eq!(agg.signals().rhythm, 1.0);
}

#[test]
fn exploration_is_mean_hover_over_thousand() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_hover("card-1", 200.0, 0.0);
    agg.track_hover("card-2", 600.0, 10.0);
    assert!(approx(agg.signals().exploration, 0.4));
}

#[test]
fn gaze_uses_first_and_last_of_three_samples() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_mouse(0.0, 0.0, 0.0);
    agg.track_mouse(500.0, 500.0, 50.0); // ignored by the distance metric
    agg.track_mouse(30.0, 40.0, 100.0);
    let g = agg.gaze();
    // distance 50 px over 100 ms -> raw 0.5 px/ms
    assert!(approx(g.velocity, 500.0), "velocity {}", g.velocity);
    assert_eq!(g.intensity, 1.0); // 0.5 * 500 saturates
    assert_eq!(g.position.x, 30.0);
}

#[test]
fn slow_gaze_intensity_scales_by_five_hundred() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_mouse(0.0, 0.0, 0.0);
    agg.track_mouse(0.0, 0.0, 500.0);
    agg.track_mouse(1.0, 0.0, 1000.0);
    let g = agg.gaze();
    // 1 px over 1000 ms -> raw 0.001
    assert!(approx(g.velocity, 1.0));
    assert!(approx(g.intensity, 0.5));
}

#[test]
fn gaze_needs_three_samples() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_mouse(0.0, 0.0, 0.0);
    agg.track_mouse(100.0, 0.0, 10.0);
    assert_eq!(agg.gaze().velocity, 0.0);
}

#[test]
fn zero_elapsed_time_divides_by_one() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_mouse(0.0, 0.0, 5.0);
    agg.track_mouse(0.0, 0.0, 5.0);
    agg.track_mouse(3.0, 4.0, 5.0);
    assert!(approx(agg.gaze().velocity, 5000.0));
}

#[test]
fn hesitation_requires_ten_samples() {
    let mut agg = BehaviorSignalAggregator::new();
    for i in 0..9 {
        agg.track_mouse(i as f32 * 100.0, 0.0, i as f64);
    }
    agg.analyze_hesitation();
    assert_eq!(agg.signals().hesitation, 0.2, "should keep initial value");
}

#[test]
fn steady_motion_has_zero_hesitation() {
    let mut agg = BehaviorSignalAggregator::new();
    for i in 0..10 {
        agg.track_mouse(i as f32 * 7.0, 0.0, i as f64 * 16.0);
    }
    agg.analyze_hesitation();
    assert_eq!(agg.signals().hesitation, 0.0);
}

#[test]
fn hesitation_is_step_variance_over_thousand() {
    let mut agg = BehaviorSignalAggregator::new();
    // Steps alternate 0 and 20 px: 5 zeros, 4 twenties over 9 steps
    let xs = [0.0, 0.0, 20.0, 20.0, 40.0, 40.0, 60.0, 60.0, 80.0, 80.0];
    for (i, x) in xs.iter().enumerate() {
        agg.track_mouse(*x, 0.0, i as f64);
    }
    agg.analyze_hesitation();
    let steps = [0.0_f32, 20.0, 0.0, 20.0, 0.0, 20.0, 0.0, 20.0, 0.0];
    let mean = steps.iter().sum::<f32>() / 9.0;
    let var = steps.iter().map(|d| (d - mean).powi(2)).sum::<f32>() / 9.0;
    assert!(approx(agg.signals().hesitation, var / 1000.0));
}

#[test]
fn hesitation_only_looks_at_last_ten_samples() {
    let mut agg = BehaviorSignalAggregator::new();
    // Wild jumps first, then ten evenly spaced samples
    for i in 0..20 {
        let x = if i % 2 == 0 { 0.0 } else { 5000.0 };
        agg.track_mouse(x, 0.0, i as f64);
    }
    for i in 0..10 {
        agg.track_mouse(i as f32, 0.0, 100.0 + i as f64);
    }
    agg.analyze_hesitation();
    assert_eq!(agg.signals().hesitation, 0.0);
}

#[test]
fn engagement_is_mean_of_four_factors() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.set_signals(BehavioralSignals {
        intent_clarity: 0.8,
        exploration: 0.6,
        rhythm: 0.4,
        hesitation: 0.2,
        engagement: 0.0,
    });
    agg.calculate_engagement();
    assert!(approx(agg.signals().engagement, 0.65));
}

#[test]
fn signals_stay_in_unit_range_under_adversarial_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut agg = BehaviorSignalAggregator::new();
    let mut t = 0.0_f64;
    for step in 0..5000 {
        // bursts of identical timestamps, huge coordinates, negative values
        if rng.gen_bool(0.7) {
            t += rng.gen_range(0.0..50.0);
        }
        let x = rng.gen_range(-1.0e6..1.0e6_f32);
        let y = rng.gen_range(-1.0e6..1.0e6_f32);
        match step % 6 {
            0 => agg.track_mouse(x, y, t),
            1 => agg.track_scroll(y, rng.gen_range(-1.0e5..1.0e5), t),
            2 => agg.track_click(x, y, "burst", t),
            3 => agg.track_hover("el", rng.gen_range(-5000.0..50_000.0), t),
            4 => agg.analyze_hesitation(),
            _ => agg.calculate_engagement(),
        }
        for v in agg.signals().as_array() {
            assert!((0.0..=1.0).contains(&v), "signal {v} out of range at step {step}");
        }
        let g = agg.gaze();
        assert!((0.0..=1.0).contains(&g.intensity));
    }
}

#[test]
fn non_finite_input_is_ignored() {
    let mut agg = BehaviorSignalAggregator::new();
    agg.track_mouse(f32::NAN, 0.0, 0.0);
    agg.track_scroll(0.0, f32::INFINITY, 0.0);
    agg.track_hover("x", f32::NAN, 0.0);
    assert!(agg.mouse_history().is_empty());
    assert!(agg.scroll_history().is_empty());
    assert!(agg.hover_history().is_empty());
    assert_eq!(*agg.signals(), BehavioralSignals::default());
}

#[test]
fn classification_bands() {
    assert_eq!(EngagementLevel::classify(0.9), EngagementLevel::HighlyEngaged);
    assert_eq!(EngagementLevel::classify(0.7), EngagementLevel::Engaged);
    assert_eq!(EngagementLevel::classify(0.55), EngagementLevel::Passive);
    assert_eq!(EngagementLevel::classify(0.1), EngagementLevel::Disengaged);

    assert_eq!(IntentLevel::classify(0.95), IntentLevel::VeryHigh);
    assert_eq!(IntentLevel::classify(0.5), IntentLevel::Low);
    assert_eq!(IntentLevel::classify(0.0), IntentLevel::VeryLow);

    assert_eq!(ExplorationLevel::classify(0.2), ExplorationLevel::Focused);
    assert_eq!(ExplorationLevel::classify(0.75), ExplorationLevel::Exploring);
}

#[test]
fn bottom_bands_extend_up_to_the_next_threshold() {
    for v in [0.0, 0.3, 0.49] {
        assert_eq!(EngagementLevel::classify(v), EngagementLevel::Disengaged, "{v}");
        assert_eq!(ExplorationLevel::classify(v), ExplorationLevel::Focused, "{v}");
    }
    assert_eq!(EngagementLevel::classify(0.5), EngagementLevel::Passive);
    assert_eq!(ExplorationLevel::classify(0.5), ExplorationLevel::Balanced);
    assert_eq!(IntentLevel::classify(0.2), IntentLevel::VeryLow);
    assert_eq!(IntentLevel::classify(0.39), IntentLevel::VeryLow);
    assert_eq!(IntentLevel::classify(0.4), IntentLevel::Low);
}
