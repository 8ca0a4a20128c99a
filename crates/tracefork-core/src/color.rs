use crate::error::{EngineError, EngineResult};
use crate::modes::Palette;

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Parse `#rrggbb` (leading `#` optional, case-insensitive).
pub fn hex_to_rgb(hex: &str) -> EngineResult<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EngineError::InvalidColor(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| EngineError::InvalidColor(hex.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Normalized [0, 1] channels, the form renderers expect.
#[inline]
pub fn rgb_to_unit(rgb: [u8; 3]) -> [f32; 3] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    ]
}

pub fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |i: usize| lerp(a[i] as f32, b[i] as f32, t).round().clamp(0.0, 255.0) as u8;
    [mix(0), mix(1), mix(2)]
}

/// Blend two hex colors; `factor` 0 yields `from`, 1 yields `to`.
pub fn interpolate_color(from: &str, to: &str, factor: f32) -> EngineResult<String> {
    let a = hex_to_rgb(from)?;
    let b = hex_to_rgb(to)?;
    Ok(rgb_to_hex(lerp_rgb(a, b, factor)))
}

/// A palette with every entry decoded to RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ResolvedPalette {
    pub primary: [u8; 3],
    pub secondary: [u8; 3],
    pub tertiary: [u8; 3],
    pub background: [u8; 3],
    pub accent: [u8; 3],
    pub text: [u8; 3],
}

impl ResolvedPalette {
    pub fn resolve(p: &Palette) -> EngineResult<Self> {
        Ok(Self {
            primary: hex_to_rgb(p.primary)?,
            secondary: hex_to_rgb(p.secondary)?,
            tertiary: hex_to_rgb(p.tertiary)?,
            background: hex_to_rgb(p.background)?,
            accent: hex_to_rgb(p.accent)?,
            text: hex_to_rgb(p.text)?,
        })
    }

    pub fn blend(&self, other: &Self, t: f32) -> Self {
        Self {
            primary: lerp_rgb(self.primary, other.primary, t),
            secondary: lerp_rgb(self.secondary, other.secondary, t),
            tertiary: lerp_rgb(self.tertiary, other.tertiary, t),
            background: lerp_rgb(self.background, other.background, t),
            accent: lerp_rgb(self.accent, other.accent, t),
            text: lerp_rgb(self.text, other.text, t),
        }
    }

    /// Named entries in a fixed order, for writing out as style variables.
    pub fn entries(&self) -> [(&'static str, [u8; 3]); 6] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("tertiary", self.tertiary),
            ("background", self.background),
            ("accent", self.accent),
            ("text", self.text),
        ]
    }
}
