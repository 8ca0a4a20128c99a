// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use tracefork_core::ModeId;

#[test]
fn href_fragments_name_modes() {
    assert_eq!(mode_from_href("#focus"), Some(ModeId::Focus));
    assert_eq!(mode_from_href("/about#flow"), Some(ModeId::Flow));
    assert_eq!(mode_from_href("neural"), Some(ModeId::Neural));
    assert_eq!(mode_from_href("#"), None);
    assert_eq!(mode_from_href("#Focus"), None, "ids are case-sensitive");
}

#[test]
fn digit_keys_map_in_table_order() {
    let keys = ["1", "2", "3", "4"];
    for (k, m) in keys.iter().zip(ModeId::ALL) {
        assert_eq!(mode_for_key(k), Some(m));
    }
    assert_eq!(mode_for_key("5"), None);
    assert_eq!(mode_for_key("0"), None);
}

#[test]
fn cycling_visits_every_mode_and_wraps() {
    let mut m = ModeId::Explorer;
    let mut seen = vec![m];
    for _ in 0..3 {
        m = cycle_mode(m);
        seen.push(m);
    }
    assert_eq!(seen, ModeId::ALL.to_vec());
    assert_eq!(cycle_mode(ModeId::Neural), ModeId::Explorer);
}

#[test]
fn hover_reports_duration_on_leave() {
    let mut h = HoverTracker::default();
    assert!(h.enter("card-a", 100.0).is_none());
    // re-entering the same element keeps the first start
    assert!(h.enter("card-a", 300.0).is_none());
    assert_eq!(h.leave(850.0), Some(("card-a".to_string(), 750.0)));
    assert!(h.leave(900.0).is_none());
}

#[test]
fn hover_switch_finishes_previous_element() {
    let mut h = HoverTracker::default();
    h.enter("a", 0.0);
    assert_eq!(h.enter("b", 400.0), Some(("a".to_string(), 400.0)));
    // clock going backwards never yields a negative duration
    assert_eq!(h.leave(100.0), Some(("b".to_string(), 0.0)));
}

#[test]
fn only_a_real_unload_disposes_the_session() {
    assert_eq!(page_lifecycle("pagehide", false), PageLifecycle::Dispose);
    assert_eq!(page_lifecycle("pagehide", true), PageLifecycle::Suspend);
    assert_eq!(page_lifecycle("pageshow", true), PageLifecycle::Resume);
    assert_eq!(page_lifecycle("pageshow", false), PageLifecycle::Ignore);
}
