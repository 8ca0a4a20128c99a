// Host-side tests for snapshot -> CSS variable mapping.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;
use tracefork_core::{ModeId, ResolvedPalette, Session, SessionConfig};

fn palette(mode: ModeId) -> ResolvedPalette {
    ResolvedPalette::resolve(&mode.config().colors).unwrap()
}

fn var<'a>(vars: &'a [(String, String)], name: &str) -> Option<&'a str> {
    vars.iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn css_rgb_format() {
    assert_eq!(css_rgb([0, 255, 16]), "rgb(0, 255, 16)");
}

#[test]
fn vars_cover_palette_visual_and_timing() {
    let session = Session::new(SessionConfig::default(), 0.0);
    let snap = session.snapshot(0.0);
    let p = palette(snap.current_mode);
    let vars = style_vars(&snap, &p);

    assert_eq!(var(&vars, "--tf-primary"), Some(css_rgb(p.primary).as_str()));
    assert_eq!(var(&vars, "--tf-background"), Some(css_rgb(p.background).as_str()));
    assert!(var(&vars, "--tf-bloom").is_some());
    assert!(var(&vars, "--tf-engagement").is_some());
    assert_eq!(var(&vars, "--tf-transition-duration"), Some("1.20s"));
    assert_eq!(
        var(&vars, "--tf-easing"),
        Some(snap.mode_config.timing.easing)
    );
    let names: std::collections::HashSet<_> = vars.iter().map(|(n, _)| n).collect();
    assert_eq!(names.len(), vars.len(), "duplicate custom property");
}

#[test]
fn frame_palette_blends_only_while_transitioning() {
    let from = palette(ModeId::Explorer);
    let to = palette(ModeId::Neural);
    assert_eq!(frame_palette(&from, &to, None), to);
    assert_eq!(frame_palette(&from, &to, Some(0.0)), from);
    assert_eq!(frame_palette(&from, &to, Some(1.0)), to);
    let mid = frame_palette(&from, &to, Some(0.5));
    assert_ne!(mid, from);
    assert_ne!(mid, to);
}
