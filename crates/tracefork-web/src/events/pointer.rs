use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tracefork_core::{Session, SessionClock};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attribute marking elements whose hover time feeds the exploration signal.
const HOVER_ATTR: &str = "data-track-hover";
/// Attribute on navigation controls naming the mode they activate.
const MODE_ATTR: &str = "data-mode";

#[derive(Clone)]
pub struct InputWiring {
    pub session: Rc<RefCell<Session>>,
    pub clock: SessionClock,
    pub hover: Rc<RefCell<input::HoverTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.unchecked_ref();
    wire_pointermove(&w, target);
    wire_click(&w, target);
    wire_hover(&w, target);
}

fn wire_pointermove(w: &InputWiring, target: &web::EventTarget) {
    let w = w.clone();
    dom::listen(target, "pointermove", move |ev: web::PointerEvent| {
        let now = w.clock.now_ms();
        w.session
            .borrow_mut()
            .track_mouse(ev.client_x() as f32, ev.client_y() as f32, now);
    });
}

fn wire_click(w: &InputWiring, target: &web::EventTarget) {
    let w = w.clone();
    dom::listen(target, "click", move |ev: web::MouseEvent| {
        let now = w.clock.now_ms();
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let nav = dom::closest_with_attr(ev.target(), MODE_ATTR);
        let clicked = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok());
        let label = nav
            .as_ref()
            .or(clicked.as_ref())
            .map(dom::element_label)
            .unwrap_or_else(|| "document".to_string());
        let mut session = w.session.borrow_mut();
        session.track_click(x, y, label, now);

        let Some(el) = nav else {
            return;
        };
        let mode = el
            .get_attribute(MODE_ATTR)
            .or_else(|| el.get_attribute("href"))
            .and_then(|v| input::mode_from_href(&v));
        match mode {
            Some(m) => {
                ev.prevent_default();
                if session.switch_mode(m, now) {
                    log::info!("[click] switch to {}", m);
                }
            }
            None => log::warn!("[click] navigation element without a known mode"),
        }
    });
}

fn wire_hover(w: &InputWiring, target: &web::EventTarget) {
    let over = w.clone();
    dom::listen(target, "pointerover", move |ev: web::PointerEvent| {
        let Some(el) = dom::closest_with_attr(ev.target(), HOVER_ATTR) else {
            return;
        };
        let now = over.clock.now_ms();
        let finished = over.hover.borrow_mut().enter(&dom::element_label(&el), now);
        if let Some((label, duration)) = finished {
            over.session.borrow_mut().track_hover(label, duration, now);
        }
    });

    let out = w.clone();
    dom::listen(target, "pointerout", move |ev: web::PointerEvent| {
        let leaving = dom::closest_with_attr(ev.target(), HOVER_ATTR);
        let entering = dom::closest_with_attr(ev.related_target(), HOVER_ATTR);
        // Moving between children of the same tracked element is not a leave
        if leaving.is_none() || leaving == entering {
            return;
        }
        let now = out.clock.now_ms();
        let finished = out.hover.borrow_mut().leave(now);
        if let Some((label, duration)) = finished {
            out.session.borrow_mut().track_hover(label, duration, now);
        }
    });
}
