//! The fixed set of visual modes and their configuration bundles.
//!
//! Configurations are `'static` and never mutated; everything downstream
//! (camera, particle field, palette, post-processing) reads from them.

use crate::easing::Easing;
use crate::error::{EngineError, EngineResult};
use crate::state::VisualPatch;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ModeId {
    #[default]
    Explorer,
    Focus,
    Flow,
    Neural,
}

impl ModeId {
    pub const ALL: [ModeId; 4] = [ModeId::Explorer, ModeId::Focus, ModeId::Flow, ModeId::Neural];

    pub fn as_str(self) -> &'static str {
        match self {
            ModeId::Explorer => "explorer",
            ModeId::Focus => "focus",
            ModeId::Flow => "flow",
            ModeId::Neural => "neural",
        }
    }

    #[inline]
    pub fn config(self) -> &'static ModeConfig {
        match self {
            ModeId::Explorer => &EXPLORER,
            ModeId::Focus => &FOCUS,
            ModeId::Flow => &FLOW,
            ModeId::Neural => &NEURAL,
        }
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "explorer" => Ok(ModeId::Explorer),
            "focus" => Ok(ModeId::Focus),
            "flow" => Ok(ModeId::Flow),
            "neural" => Ok(ModeId::Neural),
            other => Err(EngineError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub transition_duration_sec: f32,
    /// CSS timing function, e.g. `cubic-bezier(0.4, 0.0, 0.2, 1)`.
    pub easing: &'static str,
    pub stagger_delay_sec: f32,
}

impl Timing {
    #[inline]
    pub fn transition_duration_ms(&self) -> f64 {
        // whole milliseconds; f32 seconds do not widen exactly
        (self.transition_duration_sec as f64 * 1000.0).round()
    }

    pub fn easing_curve(&self) -> EngineResult<Easing> {
        Easing::parse(self.easing)
    }
}

/// Post-processing targets a mode pushes into the visual store. Hue, noise and
/// grain are not mode-owned and keep whatever the store last held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub bloom: f32,
    pub vignette: f32,
}

impl VisualParams {
    pub fn to_patch(&self) -> VisualPatch {
        VisualPatch {
            brightness: Some(self.brightness),
            contrast: Some(self.contrast),
            saturation: Some(self.saturation),
            bloom: Some(self.bloom),
            vignette: Some(self.vignette),
            ..VisualPatch::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub fov_degrees: f32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub look_at: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: u32,
    pub size: f32,
    pub speed: f32,
    pub spread: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeConfig {
    pub id: ModeId,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: Palette,
    pub timing: Timing,
    pub visual: VisualParams,
    pub camera: CameraParams,
    pub particles: ParticleParams,
}

/// Look up a configuration by its string identifier.
pub fn mode_config_by_name(name: &str) -> EngineResult<&'static ModeConfig> {
    name.parse::<ModeId>().map(ModeId::config)
}

pub static EXPLORER: ModeConfig = ModeConfig {
    id: ModeId::Explorer,
    name: "Explorer",
    description: "Open, curious, expansive cognitive state",
    colors: Palette {
        primary: "#00ffff",
        secondary: "#0088ff",
        tertiary: "#00ccff",
        background: "#0a0a15",
        accent: "#00ffaa",
        text: "#ffffff",
    },
    timing: Timing {
        transition_duration_sec: 1.2,
        easing: "cubic-bezier(0.4, 0.0, 0.2, 1)",
        stagger_delay_sec: 0.05,
    },
    visual: VisualParams {
        brightness: 1.1,
        contrast: 1.0,
        saturation: 1.2,
        bloom: 0.4,
        vignette: 0.1,
    },
    camera: CameraParams {
        fov_degrees: 75.0,
        position: Vec3::new(0.0, 0.0, 5.0),
        rotation: Vec3::ZERO,
        look_at: Vec3::ZERO,
    },
    particles: ParticleParams {
        count: 5000,
        size: 1.5,
        speed: 0.5,
        spread: 10.0,
        opacity: 0.8,
    },
};

pub static FOCUS: ModeConfig = ModeConfig {
    id: ModeId::Focus,
    name: "Focus",
    description: "Concentrated, minimal, deliberate cognitive state",
    colors: Palette {
        primary: "#ff00ff",
        secondary: "#cc00ff",
        tertiary: "#ff00cc",
        background: "#0f0a15",
        accent: "#ff0088",
        text: "#ffffff",
    },
    timing: Timing {
        transition_duration_sec: 0.8,
        easing: "cubic-bezier(0.6, 0.0, 0.4, 1)",
        stagger_delay_sec: 0.03,
    },
    visual: VisualParams {
        brightness: 0.9,
        contrast: 1.3,
        saturation: 0.9,
        bloom: 0.2,
        vignette: 0.3,
    },
    camera: CameraParams {
        fov_degrees: 60.0,
        position: Vec3::new(0.0, 0.0, 3.0),
        rotation: Vec3::ZERO,
        look_at: Vec3::ZERO,
    },
    particles: ParticleParams {
        count: 2000,
        size: 1.0,
        speed: 0.2,
        spread: 5.0,
        opacity: 0.6,
    },
};

pub static FLOW: ModeConfig = ModeConfig {
    id: ModeId::Flow,
    name: "Flow",
    description: "Rhythmic, immersive, seamless cognitive state",
    colors: Palette {
        primary: "#ffff00",
        secondary: "#ffcc00",
        tertiary: "#ffaa00",
        background: "#15120a",
        accent: "#ff8800",
        text: "#ffffff",
    },
    timing: Timing {
        transition_duration_sec: 1.5,
        easing: "cubic-bezier(0.3, 0.0, 0.3, 1)",
        stagger_delay_sec: 0.08,
    },
    visual: VisualParams {
        brightness: 1.0,
        contrast: 1.1,
        saturation: 1.1,
        bloom: 0.5,
        vignette: 0.15,
    },
    camera: CameraParams {
        fov_degrees: 80.0,
        position: Vec3::new(0.0, 0.0, 6.0),
        rotation: Vec3::ZERO,
        look_at: Vec3::ZERO,
    },
    particles: ParticleParams {
        count: 7000,
        size: 2.0,
        speed: 0.7,
        spread: 15.0,
        opacity: 0.9,
    },
};

pub static NEURAL: ModeConfig = ModeConfig {
    id: ModeId::Neural,
    name: "Neural",
    description: "Deep, complex, interconnected cognitive state",
    colors: Palette {
        primary: "#00ff88",
        secondary: "#00ffaa",
        tertiary: "#00ffcc",
        background: "#0a1510",
        accent: "#00ff66",
        text: "#ffffff",
    },
    timing: Timing {
        transition_duration_sec: 1.0,
        easing: "cubic-bezier(0.5, 0.0, 0.5, 1)",
        stagger_delay_sec: 0.04,
    },
    visual: VisualParams {
        brightness: 1.0,
        contrast: 1.2,
        saturation: 1.0,
        bloom: 0.35,
        vignette: 0.2,
    },
    camera: CameraParams {
        fov_degrees: 70.0,
        position: Vec3::new(0.0, 0.0, 4.0),
        rotation: Vec3::ZERO,
        look_at: Vec3::ZERO,
    },
    particles: ParticleParams {
        count: 4000,
        size: 1.2,
        speed: 0.3,
        spread: 8.0,
        opacity: 0.7,
    },
};
