use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tracefork_core::{Session, SessionClock};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Rc<RefCell<Session>>, now_ms: f64) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(mode) = input::mode_for_key(&key) {
        session.borrow_mut().switch_mode(mode, now_ms);
        return;
    }
    match key.as_str() {
        "m" | "M" => {
            let mut s = session.borrow_mut();
            let next = input::cycle_mode(s.engine().current_mode());
            s.switch_mode(next, now_ms);
        }
        "s" | "S" => {
            // Advisory only: report, never act
            let s = session.borrow();
            let snap = s.snapshot(now_ms);
            log::info!(
                "[behavior] suggest={} intent={:.2} explore={:.2} rhythm={:.2} hesitation={:.2} engagement={:.2}",
                s.suggest_mode(),
                snap.signals.intent_clarity,
                snap.signals.exploration,
                snap.signals.rhythm,
                snap.signals.hesitation,
                snap.signals.engagement
            );
        }
        _ => {}
    }
}

pub fn wire_global_keydown(session: Rc<RefCell<Session>>, clock: SessionClock) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.unchecked_ref();
    dom::listen(target, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &session, clock.now_ms());
    });
}
