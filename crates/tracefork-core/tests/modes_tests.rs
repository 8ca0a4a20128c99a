// Host-side tests for the mode table and its derived values.

use tracefork_core::color::{hex_to_rgb, interpolate_color};
use tracefork_core::constants::*;
use tracefork_core::{mode_config_by_name, ModeId, ResolvedPalette};

#[test]
fn identifiers_round_trip_through_strings() {
    for m in ModeId::ALL {
        assert_eq!(m.as_str().parse::<ModeId>().unwrap(), m);
        assert_eq!(m.config().id, m, "table entry for {m} has the wrong id");
        assert_eq!(m.to_string(), m.as_str());
    }
    assert!("Explorer".parse::<ModeId>().is_err(), "lookup is case-sensitive");
    assert!(mode_config_by_name("").is_err());
}

#[test]
fn every_palette_entry_is_valid_hex() {
    for m in ModeId::ALL {
        let c = &m.config().colors;
        for hex in [c.primary, c.secondary, c.tertiary, c.background, c.accent, c.text] {
            assert!(hex_to_rgb(hex).is_ok(), "{m}: bad color {hex}");
        }
        assert!(ResolvedPalette::resolve(c).is_ok());
    }
}

#[test]
fn every_easing_curve_parses() {
    for m in ModeId::ALL {
        let timing = &m.config().timing;
        let curve = timing.easing_curve();
        assert!(curve.is_ok(), "{m}: {:?}", timing.easing);
        assert!(timing.transition_duration_ms() > MODE_SETTLE_MS);
    }
}

#[test]
fn configured_durations_match_table() {
    let ms = |m: ModeId| m.config().timing.transition_duration_ms();
    // exact, no f32 widening residue
    assert_eq!(ms(ModeId::Explorer), 1200.0);
    assert_eq!(ms(ModeId::Focus), 800.0);
    assert_eq!(ms(ModeId::Flow), 1500.0);
    assert_eq!(ms(ModeId::Neural), 1000.0);
}

#[test]
fn visual_patch_sets_only_mode_owned_fields() {
    let patch = ModeId::Flow.config().visual.to_patch();
    assert!(!patch.is_empty());
    assert_eq!(patch.bloom, Some(0.5));
    assert_eq!(patch.vignette, Some(0.15));
    assert!(patch.hue.is_none());
    assert!(patch.noise.is_none());
    assert!(patch.grain.is_none());
}

#[test]
fn palette_blend_endpoints() {
    let a = ResolvedPalette::resolve(&ModeId::Explorer.config().colors).unwrap();
    let b = ResolvedPalette::resolve(&ModeId::Focus.config().colors).unwrap();
    assert_eq!(a.blend(&b, 0.0), a);
    assert_eq!(a.blend(&b, 1.0), b);
    assert_eq!(
        interpolate_color("#00ffff", "#ff00ff", 1.0).unwrap(),
        "#ff00ff"
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn window_caps_and_periods_are_sane() {
    assert!(MOUSE_HISTORY_CAP >= HESITATION_SAMPLE_COUNT);
    assert!(MOUSE_HISTORY_CAP >= GAZE_SAMPLE_SPAN);
    assert!(ENGAGEMENT_PERIOD_MS > HESITATION_PERIOD_MS);
    assert!(SYSTEM_READY_MS > GENESIS_COMPLETE_MS);
    assert!(GAZE_VELOCITY_SCALE > GAZE_INTENSITY_SCALE);
}
