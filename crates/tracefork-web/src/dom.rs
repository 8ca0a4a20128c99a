use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Walk up from the event target to the closest element carrying `attr`.
pub fn closest_with_attr(target: Option<web::EventTarget>, attr: &str) -> Option<web::Element> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    el.closest(&format!("[{attr}]")).ok().flatten()
}

/// Stable label for an element: its id, else its tag name.
pub fn element_label(el: &web::Element) -> String {
    let id = el.id();
    if id.is_empty() {
        el.tag_name().to_ascii_lowercase()
    } else {
        id
    }
}

pub fn set_root_vars(document: &web::Document, vars: &[(String, String)]) {
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    for (name, value) in vars {
        let _ = style.set_property(name, value);
    }
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

pub fn set_body_data(document: &web::Document, key: &str, value: &str) {
    if let Some(body) = document.body() {
        let _ = body.dataset().set(key, value);
    }
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// JS heap in use, in MB. Only Chromium exposes `performance.memory`.
pub fn used_heap_mb() -> Option<f32> {
    let perf = web::window()?.performance()?;
    let memory = js_sys::Reflect::get(&perf, &JsValue::from_str("memory")).ok()?;
    if memory.is_undefined() {
        return None;
    }
    let used = js_sys::Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize"))
        .ok()?
        .as_f64()?;
    Some((used / (1024.0 * 1024.0)) as f32)
}
