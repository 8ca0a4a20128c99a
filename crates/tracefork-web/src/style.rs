// Snapshot -> CSS custom properties. Kept free of web-sys so it can be tested
// on the host.

use tracefork_core::{ResolvedPalette, SessionSnapshot};

#[inline]
pub fn css_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}

/// Custom properties for the page root, e.g. `--tf-primary`, `--tf-bloom`.
pub fn style_vars(snap: &SessionSnapshot, palette: &ResolvedPalette) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = palette
        .entries()
        .iter()
        .map(|(name, rgb)| (format!("--tf-{name}"), css_rgb(*rgb)))
        .collect();

    let v = &snap.visual;
    for (name, value) in [
        ("brightness", v.brightness),
        ("contrast", v.contrast),
        ("saturation", v.saturation),
        ("hue", v.hue),
        ("bloom", v.bloom),
        ("vignette", v.vignette),
        ("noise", v.noise),
        ("grain", v.grain),
        ("gaze-intensity", snap.gaze.intensity),
        ("engagement", snap.signals.engagement),
    ] {
        vars.push((format!("--tf-{name}"), format!("{value:.3}")));
    }

    let timing = &snap.mode_config.timing;
    vars.push((
        "--tf-transition-duration".to_string(),
        format!("{:.2}s", timing.transition_duration_sec),
    ));
    vars.push(("--tf-easing".to_string(), timing.easing.to_string()));
    vars.push((
        "--tf-stagger".to_string(),
        format!("{:.2}s", timing.stagger_delay_sec),
    ));
    vars
}

/// Palette to display this frame: blends from the previous mode while a
/// transition is running.
pub fn frame_palette(
    from: &ResolvedPalette,
    to: &ResolvedPalette,
    progress: Option<f32>,
) -> ResolvedPalette {
    match progress {
        Some(t) => from.blend(to, t),
        None => *to,
    }
}
