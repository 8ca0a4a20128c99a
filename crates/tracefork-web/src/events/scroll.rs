use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use tracefork_core::{Session, SessionClock};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed page scroll into the rhythm signal. The delta is measured between
/// consecutive scroll events rather than taken from wheel deltas so that
/// keyboard and touch scrolling count too.
pub fn wire_scroll(session: Rc<RefCell<Session>>, clock: SessionClock) {
    let Some(window) = web::window() else {
        return;
    };
    let last_y = Rc::new(RefCell::new(dom::scroll_y()));
    let target: &web::EventTarget = window.unchecked_ref();
    dom::listen(target, "scroll", move |_ev: web::Event| {
        let y = dom::scroll_y();
        let delta = {
            let mut last = last_y.borrow_mut();
            let d = y - *last;
            *last = y;
            d
        };
        session.borrow_mut().track_scroll(y, delta, clock.now_ms());
    });
}
