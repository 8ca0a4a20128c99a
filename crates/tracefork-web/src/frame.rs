use crate::dom;
use crate::overlay;
use crate::style;
use std::cell::RefCell;
use std::rc::Rc;
use tracefork_core::{
    FrameRateMeter, ModeId, NarrativePhase, PerformanceGrade, ResolvedPalette, Session,
    SessionClock,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub clock: SessionClock,
    pub document: web::Document,
    pub meter: FrameRateMeter,
    pub last_grade: Option<PerformanceGrade>,
    pub palettes: [ResolvedPalette; 4],
    pub last_mode: Option<ModeId>,
    pub last_transitioning: bool,
    pub last_narrative: NarrativePhase,
}

impl FrameContext {
    pub fn new(
        session: Rc<RefCell<Session>>,
        clock: SessionClock,
        document: web::Document,
    ) -> anyhow::Result<Self> {
        let mut palettes = [ResolvedPalette::default(); 4];
        for (slot, mode) in palettes.iter_mut().zip(ModeId::ALL) {
            *slot = ResolvedPalette::resolve(&mode.config().colors)?;
        }
        Ok(Self {
            session,
            clock,
            document,
            meter: FrameRateMeter::new(),
            last_grade: None,
            palettes,
            last_mode: None,
            last_transitioning: false,
            last_narrative: NarrativePhase::Initialization,
        })
    }

    fn palette(&self, mode: ModeId) -> &ResolvedPalette {
        let i = ModeId::ALL.iter().position(|m| *m == mode).unwrap_or(0);
        &self.palettes[i]
    }

    /// One animation frame. Returns `false` once the session is gone.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.now_ms();
        let mut session = self.session.borrow_mut();
        if session.is_disposed() {
            return false;
        }
        session.tick(now);
        if let Some(mut patch) = self.meter.frame(now) {
            patch.memory_mb = dom::used_heap_mb();
            session.update_metrics(&patch);
            let grade = PerformanceGrade::of(session.store().metrics());
            if self.last_grade != Some(grade) {
                log::info!(
                    "[perf] {:?} fps={:.0} heap={:.0}MB",
                    grade,
                    session.store().metrics().fps,
                    session.store().metrics().memory_mb
                );
                self.last_grade = Some(grade);
            }
        }

        let snap = session.snapshot(now);
        let palette = match session.engine().transition() {
            Some(t) => style::frame_palette(
                self.palette(t.from),
                self.palette(t.to),
                snap.transition_progress,
            ),
            None => *self.palette(snap.current_mode),
        };
        drop(session);

        dom::set_root_vars(&self.document, &style::style_vars(&snap, &palette));

        if self.last_mode != Some(snap.current_mode) {
            dom::set_body_data(&self.document, "mode", snap.current_mode.as_str());
            self.last_mode = Some(snap.current_mode);
        }
        if self.last_transitioning != snap.transitioning {
            dom::set_body_class(&self.document, "is-transitioning", snap.transitioning);
            self.last_transitioning = snap.transitioning;
        }
        if self.last_narrative != snap.narrative {
            match snap.narrative {
                NarrativePhase::Genesis => overlay::hide(&self.document),
                NarrativePhase::Ready => dom::set_body_class(&self.document, "system-ready", true),
                NarrativePhase::Initialization => overlay::show(&self.document),
            }
            self.last_narrative = snap.narrative;
        }
        true
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            // Session disposed: drop the closure so the loop ends
            log::info!("[frame] loop stopped");
            tick_clone.borrow_mut().take();
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) else {
        return;
    };
    let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
}
