//! Session: explicit owner of the engine, the behaviour aggregator, the state
//! store and every timer that drives them.
//!
//! A front-end creates one `Session` at page load, forwards input events to
//! it, calls [`Session::tick`] once per frame and calls [`Session::dispose`]
//! on unload. After disposal every operation is a no-op.

use crate::behavior::{BehaviorSignalAggregator, BehavioralSignals, GazePattern};
use crate::constants::*;
use crate::engine::{ModeEngine, TransitionPlan};
use crate::error::{EngineError, EngineResult};
use crate::modes::{ModeConfig, ModeId};
use crate::scheduler::{Scheduler, TimerId};
use crate::state::{
    CognitivePatch, CognitiveState, CognitiveStateStore, MetricsPatch, NarrativePhase,
    SystemMetrics, VisualState,
};
use log::{debug, info, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub initial_mode: ModeId,
    pub hesitation_period_ms: f64,
    pub engagement_period_ms: f64,
    pub settle_ms: f64,
    pub mode_history_cap: usize,
    /// Run the intro timers (genesis at 5 s, ready at 6 s).
    pub intro: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_mode: ModeId::Explorer,
            hesitation_period_ms: HESITATION_PERIOD_MS,
            engagement_period_ms: ENGAGEMENT_PERIOD_MS,
            settle_ms: MODE_SETTLE_MS,
            mode_history_cap: MODE_HISTORY_CAP,
            intro: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionTask {
    AnalyzeHesitation,
    CalculateEngagement,
    CommitMode,
    FinishTransition,
    Narrative(NarrativePhase),
}

/// Read-only view handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub current_mode: ModeId,
    pub transitioning: bool,
    pub transition_progress: Option<f32>,
    pub mode_config: &'static ModeConfig,
    pub cognitive: CognitiveState,
    pub visual: VisualState,
    pub signals: BehavioralSignals,
    pub gaze: GazePattern,
    pub metrics: SystemMetrics,
    pub narrative: NarrativePhase,
}

#[derive(Debug)]
pub struct Session {
    engine: ModeEngine,
    behavior: BehaviorSignalAggregator,
    store: CognitiveStateStore,
    scheduler: Scheduler<SessionTask>,
    /// Commit timer of the running transition, cleared once it runs or the
    /// transition finishes without it.
    pending_commit: Option<TimerId>,
    disposed: bool,
}

impl Session {
    pub fn new(config: SessionConfig, now_ms: f64) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_every(
            config.hesitation_period_ms,
            SessionTask::AnalyzeHesitation,
            now_ms,
        );
        scheduler.schedule_every(
            config.engagement_period_ms,
            SessionTask::CalculateEngagement,
            now_ms,
        );
        if config.intro {
            scheduler.schedule_once(
                GENESIS_COMPLETE_MS,
                SessionTask::Narrative(NarrativePhase::Genesis),
                now_ms,
            );
            scheduler.schedule_once(
                SYSTEM_READY_MS,
                SessionTask::Narrative(NarrativePhase::Ready),
                now_ms,
            );
        }
        info!("[session] started in {} mode", config.initial_mode);
        Self {
            engine: ModeEngine::with_options(
                config.initial_mode,
                config.mode_history_cap,
                config.settle_ms,
            ),
            behavior: BehaviorSignalAggregator::new(),
            store: CognitiveStateStore::new(),
            scheduler,
            pending_commit: None,
            disposed: false,
        }
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn ensure_live(&self) -> EngineResult<()> {
        if self.disposed {
            return Err(EngineError::SessionDisposed);
        }
        Ok(())
    }

    /// Request a mode switch. Redundant requests are silently ignored; the
    /// return value only reports whether this call started a transition.
    pub fn switch_mode(&mut self, target: ModeId, now_ms: f64) -> bool {
        if self.disposed {
            warn!("[session] switch_mode after dispose");
            return false;
        }
        match self.engine.switch_mode(target, now_ms) {
            Some(plan) => {
                self.schedule_transition(plan, now_ms);
                true
            }
            None => false,
        }
    }

    /// String form used by page scripts and navigation anchors.
    pub fn switch_mode_by_name(&mut self, name: &str, now_ms: f64) -> EngineResult<bool> {
        self.ensure_live()?;
        let target = name.parse::<ModeId>()?;
        Ok(self.switch_mode(target, now_ms))
    }

    fn schedule_transition(&mut self, plan: TransitionPlan, now_ms: f64) {
        let commit = self
            .scheduler
            .schedule_once(plan.commit_after_ms, SessionTask::CommitMode, now_ms);
        self.pending_commit = Some(commit);
        self.scheduler
            .schedule_once(plan.finish_after_ms, SessionTask::FinishTransition, now_ms);
    }

    pub fn track_mouse(&mut self, x: f32, y: f32, now_ms: f64) {
        if !self.disposed {
            self.behavior.track_mouse(x, y, now_ms);
        }
    }

    pub fn track_scroll(&mut self, scroll_y: f32, delta: f32, now_ms: f64) {
        if !self.disposed {
            self.behavior.track_scroll(scroll_y, delta, now_ms);
        }
    }

    pub fn track_click(&mut self, x: f32, y: f32, target: impl Into<String>, now_ms: f64) {
        if !self.disposed {
            self.behavior.track_click(x, y, target, now_ms);
        }
    }

    pub fn track_hover(&mut self, element: impl Into<String>, duration_ms: f32, now_ms: f64) {
        if !self.disposed {
            self.behavior.track_hover(element, duration_ms, now_ms);
        }
    }

    pub fn update_metrics(&mut self, patch: &MetricsPatch) {
        if !self.disposed {
            self.store.update_metrics(patch);
        }
    }

    pub fn update_cognitive(&mut self, patch: &CognitivePatch) {
        if !self.disposed {
            self.store.update_cognitive(patch);
        }
    }

    /// Advisory only; the caller decides whether to act on it.
    pub fn suggest_mode(&self) -> ModeId {
        ModeEngine::suggest_mode(self.behavior.signals())
    }

    /// Run every timer that is due at `now_ms`. Returns how many fired.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        if self.disposed {
            return 0;
        }
        let due = self.scheduler.advance(now_ms);
        for task in &due {
            match *task {
                SessionTask::AnalyzeHesitation => self.behavior.analyze_hesitation(),
                SessionTask::CalculateEngagement => self.behavior.calculate_engagement(),
                SessionTask::CommitMode => {
                    if self.pending_commit.take().is_some() {
                        self.engine.commit_transition(&mut self.store);
                    }
                }
                SessionTask::FinishTransition => {
                    // settle delay may outlast the duration
                    if let Some(id) = self.pending_commit.take() {
                        self.scheduler.cancel(id);
                    }
                    self.engine.finish_transition(&mut self.store);
                }
                SessionTask::Narrative(phase) => {
                    info!("[session] narrative -> {}", phase.as_str());
                    self.store.progress_narrative(phase);
                }
            }
        }
        due.len()
    }

    pub fn snapshot(&self, now_ms: f64) -> SessionSnapshot {
        SessionSnapshot {
            current_mode: self.engine.current_mode(),
            transitioning: self.engine.is_transitioning(),
            transition_progress: self.engine.transition_progress(now_ms),
            mode_config: self.engine.mode_config(None),
            cognitive: *self.store.cognitive(),
            visual: *self.store.visual(),
            signals: *self.behavior.signals(),
            gaze: *self.behavior.gaze(),
            metrics: *self.store.metrics(),
            narrative: self.store.narrative(),
        }
    }

    pub fn engine(&self) -> &ModeEngine {
        &self.engine
    }

    pub fn behavior(&self) -> &BehaviorSignalAggregator {
        &self.behavior
    }

    pub fn store(&self) -> &CognitiveStateStore {
        &self.store
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Cancel every timer and refuse further input.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.scheduler.cancel_all();
        self.pending_commit = None;
        self.disposed = true;
        debug!("[session] disposed");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.dispose();
    }
}
