//! Mode engine: the single source of truth for the active visual mode.
//!
//! A switch is accepted only from a stable state and only towards a different
//! mode. Accepting a switch does not change the current mode immediately; the
//! caller receives a [`TransitionPlan`] and is expected to call
//! [`ModeEngine::commit_transition`] after the settle delay and
//! [`ModeEngine::finish_transition`] once the target's duration has elapsed.
//! [`crate::Session`] does exactly that through its scheduler.

use crate::behavior::BehavioralSignals;
use crate::constants::*;
use crate::easing::Easing;
use crate::error::EngineResult;
use crate::history::BoundedHistory;
use crate::modes::{mode_config_by_name, ModeConfig, ModeId};
use crate::state::CognitiveStateStore;
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: ModeId,
    pub to: ModeId,
    pub started_at_ms: f64,
    pub duration_ms: f64,
    pub committed: bool,
}

/// Deferred steps the owner of the engine must schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionPlan {
    pub target: ModeId,
    pub commit_after_ms: f64,
    pub finish_after_ms: f64,
}

#[derive(Clone, Debug)]
pub struct ModeEngine {
    current: ModeId,
    transition: Option<Transition>,
    history: BoundedHistory<ModeId>,
    settle_ms: f64,
}

impl Default for ModeEngine {
    fn default() -> Self {
        Self::new(ModeId::default())
    }
}

impl ModeEngine {
    pub fn new(initial: ModeId) -> Self {
        Self::with_options(initial, MODE_HISTORY_CAP, MODE_SETTLE_MS)
    }

    pub fn with_options(initial: ModeId, history_cap: usize, settle_ms: f64) -> Self {
        let mut history = BoundedHistory::with_capacity(history_cap);
        history.push(initial);
        Self {
            current: initial,
            transition: None,
            history,
            settle_ms: settle_ms.max(0.0),
        }
    }

    #[inline]
    pub fn current_mode(&self) -> ModeId {
        self.current
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    #[inline]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn history(&self) -> &BoundedHistory<ModeId> {
        &self.history
    }

    /// Request a switch to `target`.
    ///
    /// Returns `None` (and changes nothing) when `target` is already active or
    /// another transition is still running.
    pub fn switch_mode(&mut self, target: ModeId, now_ms: f64) -> Option<TransitionPlan> {
        if target == self.current {
            debug!("[mode] ignoring switch to current mode {}", target);
            return None;
        }
        if let Some(t) = &self.transition {
            debug!(
                "[mode] ignoring switch to {} while {} -> {} is running",
                target, t.from, t.to
            );
            return None;
        }
        let duration_ms = target.config().timing.transition_duration_ms();
        self.transition = Some(Transition {
            from: self.current,
            to: target,
            started_at_ms: now_ms,
            duration_ms,
            committed: false,
        });
        self.history.push(target);
        info!("[mode] {} -> {} ({:.0} ms)", self.current, target, duration_ms);
        Some(TransitionPlan {
            target,
            commit_after_ms: self.settle_ms,
            finish_after_ms: duration_ms,
        })
    }

    /// Make the transition target the current mode and push its visual
    /// parameters into `store`. No-op without a pending, uncommitted transition.
    pub fn commit_transition(&mut self, store: &mut CognitiveStateStore) {
        let Some(t) = self.transition.as_mut() else {
            warn!("[mode] commit without an active transition");
            return;
        };
        if t.committed {
            return;
        }
        t.committed = true;
        self.current = t.to;
        store.update_visual(&t.to.config().visual.to_patch());
        debug!("[mode] committed {}", t.to);
    }

    /// Clear the in-progress flag. A transition that was never committed is
    /// committed first so the engine cannot end up stable on the old mode.
    pub fn finish_transition(&mut self, store: &mut CognitiveStateStore) {
        if matches!(self.transition, Some(t) if !t.committed) {
            self.commit_transition(store);
        }
        if let Some(t) = self.transition.take() {
            debug!("[mode] transition to {} settled", t.to);
        }
    }

    /// Configuration for `mode`, or for the current mode when `None`.
    pub fn mode_config(&self, mode: Option<ModeId>) -> &'static ModeConfig {
        mode.unwrap_or(self.current).config()
    }

    pub fn mode_config_by_name(&self, name: &str) -> EngineResult<&'static ModeConfig> {
        mode_config_by_name(name)
    }

    /// Eased progress of the running transition in [0, 1], `None` when stable.
    pub fn transition_progress(&self, now_ms: f64) -> Option<f32> {
        let t = self.transition.as_ref()?;
        let linear = if t.duration_ms > 0.0 {
            ((now_ms - t.started_at_ms) / t.duration_ms).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        let curve = t
            .to
            .config()
            .timing
            .easing_curve()
            .unwrap_or(Easing::Linear);
        Some(curve.sample(linear))
    }

    /// Advisory mapping from behaviour to a mode. Never switches by itself.
    pub fn suggest_mode(signals: &BehavioralSignals) -> ModeId {
        let engagement = signals.engagement;
        let intent = signals.intent_clarity;
        if engagement > SUGGEST_FOCUS_ENGAGEMENT && intent > SUGGEST_FOCUS_INTENT {
            ModeId::Focus
        } else if engagement > SUGGEST_FLOW_ENGAGEMENT && intent < SUGGEST_FLOW_INTENT {
            ModeId::Flow
        } else if engagement < SUGGEST_NEURAL_ENGAGEMENT {
            ModeId::Neural
        } else {
            ModeId::Explorer
        }
    }
}
