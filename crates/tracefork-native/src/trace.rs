use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracefork_core::Session;

/// How the simulated visitor behaves during one stretch of the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persona {
    /// Long pointer jumps, lingering hovers on many elements.
    Wandering,
    /// Short steady strokes and deliberate clicks.
    Focused,
    /// Continuous scrolling at an even cadence.
    Skimming,
    /// Pointer barely moving.
    Idle,
}

impl Persona {
    pub const CYCLE: [Persona; 4] = [
        Persona::Wandering,
        Persona::Focused,
        Persona::Skimming,
        Persona::Idle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Wandering => "wandering",
            Persona::Focused => "focused",
            Persona::Skimming => "skimming",
            Persona::Idle => "idle",
        }
    }
}

/// Seeded generator of pointer, scroll, click and hover events.
pub struct SyntheticTrace {
    rng: StdRng,
    stint_ms: f64,
    pointer: (f32, f32),
    scroll_y: f32,
    hover: Option<(usize, f64)>,
}

const VIEWPORT: (f32, f32) = (1440.0, 900.0);
const TARGETS: [&str; 6] = ["nav-explorer", "nav-focus", "nav-flow", "nav-neural", "card", "hero"];

impl SyntheticTrace {
    pub fn new(seed: u64, stint_ms: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stint_ms: stint_ms.max(1.0),
            pointer: (VIEWPORT.0 * 0.5, VIEWPORT.1 * 0.5),
            scroll_y: 0.0,
            hover: None,
        }
    }

    pub fn persona_at(&self, now_ms: f64) -> Persona {
        let i = (now_ms / self.stint_ms).floor() as usize;
        Persona::CYCLE[i % Persona::CYCLE.len()]
    }

    /// Emit this frame's input into `session`.
    pub fn step(&mut self, session: &mut Session, now_ms: f64) {
        match self.persona_at(now_ms) {
            Persona::Wandering => {
                self.jump_pointer(0.35);
                if self.rng.gen_bool(0.08) {
                    let el = self.rng.gen_range(0..TARGETS.len());
                    self.hover_to(session, el, now_ms);
                }
            }
            Persona::Focused => {
                self.nudge_pointer(6.0);
                if self.rng.gen_bool(0.03) {
                    let (x, y) = self.pointer;
                    session.track_click(x, y, TARGETS[4], now_ms);
                }
            }
            Persona::Skimming => {
                self.nudge_pointer(1.0);
                if self.rng.gen_bool(0.2) {
                    let delta = self.rng.gen_range(40.0..60.0);
                    self.scroll_y += delta;
                    session.track_scroll(self.scroll_y, delta, now_ms);
                }
            }
            Persona::Idle => self.nudge_pointer(0.2),
        }
        let (x, y) = self.pointer;
        session.track_mouse(x, y, now_ms);
    }

    fn jump_pointer(&mut self, fraction: f32) {
        let dx = self.rng.gen_range(-1.0..1.0) * VIEWPORT.0 * fraction;
        let dy = self.rng.gen_range(-1.0..1.0) * VIEWPORT.1 * fraction;
        self.move_pointer(dx, dy);
    }

    fn nudge_pointer(&mut self, px: f32) {
        let dx = self.rng.gen_range(-px..=px);
        let dy = self.rng.gen_range(-px..=px);
        self.move_pointer(dx, dy);
    }

    fn move_pointer(&mut self, dx: f32, dy: f32) {
        self.pointer.0 = (self.pointer.0 + dx).clamp(0.0, VIEWPORT.0);
        self.pointer.1 = (self.pointer.1 + dy).clamp(0.0, VIEWPORT.1);
    }

    fn hover_to(&mut self, session: &mut Session, element: usize, now_ms: f64) {
        if let Some((prev, started)) = self.hover.take() {
            if prev != element {
                session.track_hover(TARGETS[prev], (now_ms - started) as f32, now_ms);
            } else {
                self.hover = Some((prev, started));
                return;
            }
        }
        self.hover = Some((element, now_ms));
    }
}
