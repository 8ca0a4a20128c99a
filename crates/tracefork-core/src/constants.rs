// Shared tuning constants for the mode engine and behaviour tracking.
//
// The numeric factors below feed the derived signals directly; changing them
// changes the observable behaviour of every front-end.

// Rolling window capacities
pub const MOUSE_HISTORY_CAP: usize = 100;
pub const SCROLL_HISTORY_CAP: usize = 50;
pub const CLICK_HISTORY_CAP: usize = 20;
pub const HOVER_HISTORY_CAP: usize = 30;
pub const MODE_HISTORY_CAP: usize = 256;

// Gaze: raw velocity is px per ms over the last three samples
pub const GAZE_SAMPLE_SPAN: usize = 3;
pub const GAZE_VELOCITY_SCALE: f32 = 1000.0; // px/ms -> px/s
pub const GAZE_INTENSITY_SCALE: f32 = 500.0;

// Rhythm: mean |scroll delta| mapped onto [0, 1]
pub const RHYTHM_DELTA_DIVISOR: f32 = 100.0;

// Intent clarity: clicks inside the window, saturating at CLICK_SATURATION
pub const CLICK_WINDOW_MS: f64 = 5000.0;
pub const CLICK_SATURATION: f32 = 5.0;

// Exploration: mean hover duration in ms mapped onto [0, 1]
pub const HOVER_DURATION_DIVISOR: f32 = 1000.0;

// Hesitation: variance of step lengths over the last N pointer samples
pub const HESITATION_SAMPLE_COUNT: usize = 10;
pub const HESITATION_VARIANCE_DIVISOR: f32 = 1000.0;

// Timer periods (ms)
pub const HESITATION_PERIOD_MS: f64 = 500.0;
pub const ENGAGEMENT_PERIOD_MS: f64 = 1000.0;

// Delay between accepting a switch and committing the new mode
pub const MODE_SETTLE_MS: f64 = 100.0;

// Intro sequence
pub const GENESIS_COMPLETE_MS: f64 = 5000.0;
pub const SYSTEM_READY_MS: f64 = 6000.0;

// Suggestion thresholds
pub const SUGGEST_FOCUS_ENGAGEMENT: f32 = 0.8;
pub const SUGGEST_FOCUS_INTENT: f32 = 0.7;
pub const SUGGEST_FLOW_ENGAGEMENT: f32 = 0.6;
pub const SUGGEST_FLOW_INTENT: f32 = 0.5;
pub const SUGGEST_NEURAL_ENGAGEMENT: f32 = 0.4;

// Frame-rate meter
pub const FRAME_WINDOW: usize = 60;

// Performance thresholds
pub const FPS_EXCELLENT: f32 = 58.0;
pub const FPS_GOOD: f32 = 50.0;
pub const FPS_ACCEPTABLE: f32 = 40.0;
pub const FPS_POOR: f32 = 30.0;

pub const MEMORY_LOW_MB: f32 = 100.0;
pub const MEMORY_MEDIUM_MB: f32 = 250.0;
pub const MEMORY_HIGH_MB: f32 = 500.0;
pub const MEMORY_CRITICAL_MB: f32 = 1000.0;

// Behavioural thresholds: lower bound of each band; the bottom band is
// everything below the next one up.
pub const INTENT_LOW: f32 = 0.4;
pub const INTENT_MEDIUM: f32 = 0.6;
pub const INTENT_HIGH: f32 = 0.8;
pub const INTENT_VERY_HIGH: f32 = 0.9;

pub const ENGAGEMENT_PASSIVE: f32 = 0.5;
pub const ENGAGEMENT_ENGAGED: f32 = 0.7;
pub const ENGAGEMENT_HIGHLY_ENGAGED: f32 = 0.85;

pub const EXPLORATION_BALANCED: f32 = 0.5;
pub const EXPLORATION_EXPLORING: f32 = 0.7;
pub const EXPLORATION_WANDERING: f32 = 0.9;
