//! Behavioural signal aggregation.
//!
//! Raw interaction events land in bounded rolling windows; each tracking call
//! appends to exactly one window and then recomputes exactly one signal.
//! Hesitation and engagement are recomputed from timer ticks instead.
//! Every signal write is clamped to [0, 1].

use crate::constants::*;
use crate::history::BoundedHistory;
use glam::Vec2;
use log::trace;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BehavioralSignals {
    pub intent_clarity: f32,
    pub exploration: f32,
    pub rhythm: f32,
    pub hesitation: f32,
    pub engagement: f32,
}

impl Default for BehavioralSignals {
    fn default() -> Self {
        Self {
            intent_clarity: 0.5,
            exploration: 0.3,
            rhythm: 0.6,
            hesitation: 0.2,
            engagement: 0.7,
        }
    }
}

impl BehavioralSignals {
    pub fn as_array(&self) -> [f32; 5] {
        [
            self.intent_clarity,
            self.exploration,
            self.rhythm,
            self.hesitation,
            self.engagement,
        ]
    }
}

/// Where the pointer is and how fast it is moving.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GazePattern {
    pub position: Vec2,
    /// Pixels per second.
    pub velocity: f32,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseSample {
    pub position: Vec2,
    pub timestamp_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f32,
    pub delta: f32,
    pub timestamp_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClickSample {
    pub position: Vec2,
    pub target: String,
    pub timestamp_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverSample {
    pub element: String,
    pub duration_ms: f32,
    pub timestamp_ms: f64,
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct BehaviorSignalAggregator {
    signals: BehavioralSignals,
    gaze: GazePattern,
    mouse: BoundedHistory<MouseSample>,
    scroll: BoundedHistory<ScrollSample>,
    clicks: BoundedHistory<ClickSample>,
    hovers: BoundedHistory<HoverSample>,
}

impl Default for BehaviorSignalAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorSignalAggregator {
    pub fn new() -> Self {
        Self {
            signals: BehavioralSignals::default(),
            gaze: GazePattern::default(),
            mouse: BoundedHistory::with_capacity(MOUSE_HISTORY_CAP),
            scroll: BoundedHistory::with_capacity(SCROLL_HISTORY_CAP),
            clicks: BoundedHistory::with_capacity(CLICK_HISTORY_CAP),
            hovers: BoundedHistory::with_capacity(HOVER_HISTORY_CAP),
        }
    }

    #[inline]
    pub fn signals(&self) -> &BehavioralSignals {
        &self.signals
    }

    #[inline]
    pub fn gaze(&self) -> &GazePattern {
        &self.gaze
    }

    pub fn mouse_history(&self) -> &BoundedHistory<MouseSample> {
        &self.mouse
    }

    pub fn scroll_history(&self) -> &BoundedHistory<ScrollSample> {
        &self.scroll
    }

    pub fn click_history(&self) -> &BoundedHistory<ClickSample> {
        &self.clicks
    }

    pub fn hover_history(&self) -> &BoundedHistory<HoverSample> {
        &self.hovers
    }

    pub fn track_mouse(&mut self, x: f32, y: f32, now_ms: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.mouse.push(MouseSample {
            position: Vec2::new(x, y),
            timestamp_ms: now_ms,
        });
        if self.mouse.len() < GAZE_SAMPLE_SPAN {
            return;
        }
        // Endpoints of the last three samples; the middle one is ignored
        let (Some(newest), Some(oldest)) = (
            self.mouse.from_back(0),
            self.mouse.from_back(GAZE_SAMPLE_SPAN - 1),
        ) else {
            return;
        };
        let dt = (newest.timestamp_ms - oldest.timestamp_ms) as f32;
        let dt = if dt == 0.0 { 1.0 } else { dt };
        let raw = newest.position.distance(oldest.position) / dt;
        self.gaze = GazePattern {
            position: newest.position,
            velocity: raw * GAZE_VELOCITY_SCALE,
            intensity: unit((raw * GAZE_INTENSITY_SCALE).min(1.0)),
        };
    }

    pub fn track_scroll(&mut self, scroll_y: f32, delta: f32, now_ms: f64) {
        if !delta.is_finite() {
            return;
        }
        self.scroll.push(ScrollSample {
            scroll_y,
            delta,
            timestamp_ms: now_ms,
        });
        let sum: f32 = self.scroll.iter().map(|s| s.delta.abs()).sum();
        let avg = sum / self.scroll.len() as f32;
        self.signals.rhythm = unit(avg / RHYTHM_DELTA_DIVISOR);
    }

    pub fn track_click(&mut self, x: f32, y: f32, target: impl Into<String>, now_ms: f64) {
        self.clicks.push(ClickSample {
            position: Vec2::new(x, y),
            target: target.into(),
            timestamp_ms: now_ms,
        });
        let recent = self
            .clicks
            .iter()
            .filter(|c| now_ms - c.timestamp_ms < CLICK_WINDOW_MS)
            .count();
        self.signals.intent_clarity = unit(recent as f32 / CLICK_SATURATION);
    }

    pub fn track_hover(&mut self, element: impl Into<String>, duration_ms: f32, now_ms: f64) {
        if !duration_ms.is_finite() {
            return;
        }
        self.hovers.push(HoverSample {
            element: element.into(),
            duration_ms,
            timestamp_ms: now_ms,
        });
        let sum: f32 = self.hovers.iter().map(|h| h.duration_ms).sum();
        let avg = sum / self.hovers.len() as f32;
        self.signals.exploration = unit(avg / HOVER_DURATION_DIVISOR);
    }

    /// Variance of pointer step lengths over the last ten samples.
    /// Skipped until enough samples exist.
    pub fn analyze_hesitation(&mut self) {
        if self.mouse.len() < HESITATION_SAMPLE_COUNT {
            trace!("[behavior] hesitation skipped: {} samples", self.mouse.len());
            return;
        }
        let recent: Vec<Vec2> = self
            .mouse
            .recent(HESITATION_SAMPLE_COUNT)
            .map(|s| s.position)
            .collect();
        let steps: Vec<f32> = recent.windows(2).map(|w| w[1].distance(w[0])).collect();
        let n = steps.len() as f32;
        let mean = steps.iter().sum::<f32>() / n;
        let variance = steps.iter().map(|d| (d - mean).powi(2)).sum::<f32>() / n;
        self.signals.hesitation = unit(variance / HESITATION_VARIANCE_DIVISOR);
    }

    pub fn calculate_engagement(&mut self) {
        let s = &self.signals;
        let factors = [s.intent_clarity, s.exploration, s.rhythm, 1.0 - s.hesitation];
        let mean = factors.iter().sum::<f32>() / factors.len() as f32;
        self.signals.engagement = unit(mean);
    }

    /// Overwrite the current signals, e.g. when restoring a recorded session.
    pub fn set_signals(&mut self, signals: BehavioralSignals) {
        self.signals = BehavioralSignals {
            intent_clarity: unit(signals.intent_clarity),
            exploration: unit(signals.exploration),
            rhythm: unit(signals.rhythm),
            hesitation: unit(signals.hesitation),
            engagement: unit(signals.engagement),
        };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngagementLevel {
    Disengaged,
    Passive,
    Engaged,
    HighlyEngaged,
}

impl EngagementLevel {
    pub fn classify(engagement: f32) -> Self {
        if engagement >= ENGAGEMENT_HIGHLY_ENGAGED {
            Self::HighlyEngaged
        } else if engagement >= ENGAGEMENT_ENGAGED {
            Self::Engaged
        } else if engagement >= ENGAGEMENT_PASSIVE {
            Self::Passive
        } else {
            Self::Disengaged
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl IntentLevel {
    pub fn classify(intent: f32) -> Self {
        if intent >= INTENT_VERY_HIGH {
            Self::VeryHigh
        } else if intent >= INTENT_HIGH {
            Self::High
        } else if intent >= INTENT_MEDIUM {
            Self::Medium
        } else if intent >= INTENT_LOW {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationLevel {
    Focused,
    Balanced,
    Exploring,
    Wandering,
}

impl ExplorationLevel {
    pub fn classify(exploration: f32) -> Self {
        if exploration >= EXPLORATION_WANDERING {
            Self::Wandering
        } else if exploration >= EXPLORATION_EXPLORING {
            Self::Exploring
        } else if exploration >= EXPLORATION_BALANCED {
            Self::Balanced
        } else {
            Self::Focused
        }
    }
}
