//! Session-scoped parameter maps shared with the presentation layer.
//!
//! Each map is only ever changed through a partial patch: fields set to
//! `Some` overwrite, `None` fields keep their current value. The store does
//! not range-check anything; callers own that discipline.

use log::trace;

macro_rules! patchable {
    (
        $(#[$meta:meta])*
        $name:ident / $patch:ident {
            $($field:ident: $ty:ty = $default:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name {
            $(pub $field: $ty,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default,)+
                }
            }
        }

        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $patch {
            $(pub $field: Option<$ty>,)+
        }

        impl $patch {
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())+
            }
        }

        impl $name {
            /// Overlay every `Some` field of `patch`.
            pub fn apply(&mut self, patch: &$patch) {
                $(
                    if let Some(v) = patch.$field {
                        self.$field = v;
                    }
                )+
            }
        }
    };
}

patchable! {
    /// Abstract drivers for decorative visuals; not a measure of real cognition.
    CognitiveState / CognitivePatch {
        intensity: f32 = 0.5,
        coherence: f32 = 0.8,
        entropy: f32 = 0.3,
        focus: f32 = 0.6,
        flow: f32 = 0.4,
        awareness: f32 = 0.9,
    }
}

patchable! {
    /// Post-processing parameters read by the renderers.
    VisualState / VisualPatch {
        brightness: f32 = 1.0,
        contrast: f32 = 1.0,
        saturation: f32 = 1.0,
        hue: f32 = 0.0,
        bloom: f32 = 0.3,
        vignette: f32 = 0.2,
        noise: f32 = 0.05,
        grain: f32 = 0.02,
    }
}

patchable! {
    SystemMetrics / MetricsPatch {
        fps: f32 = 60.0,
        memory_mb: f32 = 0.0,
        draw_calls: u32 = 0,
        triangles: u32 = 0,
    }
}

/// Intro sequence position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NarrativePhase {
    #[default]
    Initialization,
    Genesis,
    Ready,
}

impl NarrativePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            NarrativePhase::Initialization => "initialization",
            NarrativePhase::Genesis => "genesis",
            NarrativePhase::Ready => "ready",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CognitiveStateStore {
    cognitive: CognitiveState,
    visual: VisualState,
    metrics: SystemMetrics,
    narrative: NarrativePhase,
}

impl CognitiveStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_cognitive(&mut self, patch: &CognitivePatch) {
        self.cognitive.apply(patch);
    }

    pub fn update_visual(&mut self, patch: &VisualPatch) {
        trace!("[store] visual merge {:?}", patch);
        self.visual.apply(patch);
    }

    pub fn update_metrics(&mut self, patch: &MetricsPatch) {
        self.metrics.apply(patch);
    }

    pub fn progress_narrative(&mut self, phase: NarrativePhase) {
        self.narrative = phase;
    }

    #[inline]
    pub fn cognitive(&self) -> &CognitiveState {
        &self.cognitive
    }

    #[inline]
    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    #[inline]
    pub fn metrics(&self) -> &SystemMetrics {
        &self.metrics
    }

    #[inline]
    pub fn narrative(&self) -> NarrativePhase {
        self.narrative
    }
}
