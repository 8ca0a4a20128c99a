use anyhow::Context;
use tracefork_core::{FrameRateMeter, ModeId, PerformanceGrade, Session, SessionConfig};

mod trace;

use trace::SyntheticTrace;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_DURATION_MS: f64 = 12_000.0;
const FRAME_MS: f64 = 1000.0 / 60.0;
const STINT_MS: f64 = 3000.0;
const REPORT_EVERY_MS: f64 = 1000.0;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v.trim().parse().with_context(|| format!("invalid {key}={v:?}")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seed: u64 = env_or("TRACEFORK_SEED", DEFAULT_SEED)?;
    let duration_ms: f64 = env_or("TRACEFORK_DURATION_MS", DEFAULT_DURATION_MS)?;
    let follow = env_or("TRACEFORK_FOLLOW_SUGGESTIONS", false)?;
    log::info!(
        "tracefork-native seed={} duration={}ms follow={}",
        seed,
        duration_ms,
        follow
    );

    let mut session = Session::new(SessionConfig::default(), 0.0);
    let mut trace = SyntheticTrace::new(seed, STINT_MS);
    let mut switches = 0usize;
    let mut next_report = REPORT_EVERY_MS;
    let mut meter = FrameRateMeter::new();

    // Virtual time: the replay runs as fast as the host allows
    let mut now = 0.0;
    while now <= duration_ms {
        trace.step(&mut session, now);
        session.tick(now);

        if now >= next_report {
            next_report += REPORT_EVERY_MS;
            report(&session, &trace, now);
            if follow && follow_suggestion(&mut session, now) {
                switches += 1;
            }
        }

        // Synthetic frame cost: 60 fps with a slow stretch while skimming
        let cost = match trace.persona_at(now) {
            trace::Persona::Skimming => FRAME_MS * 1.6,
            _ => FRAME_MS,
        };
        now += cost;
        if let Some(patch) = meter.frame(now) {
            session.update_metrics(&patch);
        }
    }

    let history: Vec<&str> = session
        .engine()
        .history()
        .iter()
        .map(|m| m.as_str())
        .collect();
    log::info!(
        "[session] done: mode={} switches={} history={:?}",
        session.engine().current_mode(),
        switches,
        history
    );
    session.dispose();
    Ok(())
}

fn report(session: &Session, trace: &SyntheticTrace, now: f64) {
    let snap = session.snapshot(now);
    let s = &snap.signals;
    log::info!(
        "[behavior] t={:>6.0} persona={:<9} intent={:.2} explore={:.2} rhythm={:.2} hesitation={:.2} engagement={:.2} gaze={:.2}",
        now,
        trace.persona_at(now).as_str(),
        s.intent_clarity,
        s.exploration,
        s.rhythm,
        s.hesitation,
        s.engagement,
        snap.gaze.intensity
    );
    log::debug!(
        "[metrics] fps={:.0} grade={:?} narrative={}",
        snap.metrics.fps,
        PerformanceGrade::of(&snap.metrics),
        snap.narrative.as_str()
    );
}

/// Switch to the suggested mode when the engine is idle. Returns whether a
/// transition started.
fn follow_suggestion(session: &mut Session, now: f64) -> bool {
    if session.engine().is_transitioning() {
        return false;
    }
    let suggested: ModeId = session.suggest_mode();
    if suggested == session.engine().current_mode() {
        return false;
    }
    let started = session.switch_mode(suggested, now);
    if let Some(t) = session.engine().transition() {
        log::info!(
            "[mode] following suggestion {} -> {} over {:.0}ms",
            t.from,
            t.to,
            t.duration_ms
        );
    }
    started
}
