use crate::constants::*;
use crate::history::BoundedHistory;
use crate::state::{MetricsPatch, SystemMetrics};

/// Rolling frame-time meter. Reports once every [`FRAME_WINDOW`] frames.
#[derive(Clone, Debug)]
pub struct FrameRateMeter {
    frame_times: BoundedHistory<f64>,
    last_ms: Option<f64>,
    frames_since_report: usize,
    last_fps: Option<f32>,
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRateMeter {
    pub fn new() -> Self {
        Self {
            frame_times: BoundedHistory::with_capacity(FRAME_WINDOW),
            last_ms: None,
            frames_since_report: 0,
            last_fps: None,
        }
    }

    /// Record a frame boundary. Returns a metrics patch when a report is due.
    pub fn frame(&mut self, now_ms: f64) -> Option<MetricsPatch> {
        let last = self.last_ms.replace(now_ms);
        let delta = now_ms - last?;
        if !(delta.is_finite() && delta > 0.0) {
            return None;
        }
        self.frame_times.push(delta);
        self.frames_since_report += 1;
        if self.frames_since_report < FRAME_WINDOW {
            return None;
        }
        self.frames_since_report = 0;
        let avg = self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64;
        let fps = (1000.0 / avg).round() as f32;
        self.last_fps = Some(fps);
        Some(MetricsPatch {
            fps: Some(fps),
            ..MetricsPatch::default()
        })
    }

    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerformanceGrade {
    Excellent,
    Good,
    Acceptable,
    Poor,
    Critical,
}

impl PerformanceGrade {
    pub fn from_fps(fps: f32) -> Self {
        if fps >= FPS_EXCELLENT {
            Self::Excellent
        } else if fps >= FPS_GOOD {
            Self::Good
        } else if fps >= FPS_ACCEPTABLE {
            Self::Acceptable
        } else if fps >= FPS_POOR {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    /// Lower memory is better; the bands mirror the fps grades.
    pub fn from_memory_mb(mb: f32) -> Self {
        if mb < MEMORY_LOW_MB {
            Self::Excellent
        } else if mb < MEMORY_MEDIUM_MB {
            Self::Good
        } else if mb < MEMORY_HIGH_MB {
            Self::Acceptable
        } else if mb < MEMORY_CRITICAL_MB {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    /// Worst of the fps and memory grades. A zero memory reading means the
    /// host does not expose heap usage and is left out.
    pub fn of(metrics: &SystemMetrics) -> Self {
        let fps = Self::from_fps(metrics.fps);
        if metrics.memory_mb > 0.0 {
            fps.max(Self::from_memory_mb(metrics.memory_mb))
        } else {
            fps
        }
    }

}
