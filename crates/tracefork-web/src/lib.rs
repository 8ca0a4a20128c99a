#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tracefork_core::{Session, SessionClock, SessionConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod style;

thread_local! {
    static SESSION: RefCell<Option<(Rc<RefCell<Session>>, SessionClock)>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tracefork-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let clock = SessionClock::start();
    let session = Rc::new(RefCell::new(Session::new(
        SessionConfig::default(),
        clock.now_ms(),
    )));
    SESSION.with(|s| *s.borrow_mut() = Some((session.clone(), clock)));

    overlay::show(&document);
    overlay::wire_skip(&document);

    events::wire_input_handlers(events::InputWiring {
        session: session.clone(),
        clock,
        hover: Rc::new(RefCell::new(input::HoverTracker::default())),
    });
    events::wire_scroll(session.clone(), clock);
    events::wire_global_keydown(session.clone(), clock);
    wire_page_lifecycle(session.clone());

    let frame_ctx = frame::FrameContext::new(session, clock, document)?;
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}

fn wire_page_lifecycle(session: Rc<RefCell<Session>>) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["pagehide", "pageshow"] {
        let session = session.clone();
        dom::listen(
            window.unchecked_ref(),
            event,
            move |ev: web::PageTransitionEvent| match input::page_lifecycle(event, ev.persisted()) {
                input::PageLifecycle::Dispose => {
                    log::info!("[session] page unloading, disposing");
                    session.borrow_mut().dispose();
                }
                input::PageLifecycle::Suspend => log::info!("[session] page cached, keeping session"),
                input::PageLifecycle::Resume => log::info!("[session] page restored from cache"),
                input::PageLifecycle::Ignore => {}
            },
        );
    }
}

fn with_session<R>(f: impl FnOnce(&mut Session, f64) -> R) -> Result<R, JsValue> {
    SESSION.with(|s| {
        let slot = s.borrow();
        let (session, clock) = slot
            .as_ref()
            .ok_or_else(|| JsValue::from_str("session not started"))?;
        let mut session = session.borrow_mut();
        Ok(f(&mut session, clock.now_ms()))
    })
}

/// Request a mode by identifier. Returns `false` when the request was
/// ignored (same mode or a transition already running).
#[wasm_bindgen]
pub fn switch_mode(id: &str) -> Result<bool, JsValue> {
    with_session(|session, now| session.switch_mode_by_name(id, now))?
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn current_mode() -> Result<String, JsValue> {
    with_session(|session, _| session.engine().current_mode().as_str().to_string())
}

/// Advisory only; never switches.
#[wasm_bindgen]
pub fn suggest_mode() -> Result<String, JsValue> {
    with_session(|session, _| session.suggest_mode().as_str().to_string())
}
