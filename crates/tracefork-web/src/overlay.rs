use web_sys as web;

const GENESIS_OVERLAY_ID: &str = "genesis-overlay";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GENESIS_OVERLAY_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GENESIS_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(GENESIS_OVERLAY_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Skip the intro on demand (click on the overlay itself).
pub fn wire_skip(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GENESIS_OVERLAY_ID) {
        let doc = document.clone();
        crate::dom::listen(el.as_ref(), "click", move |_ev: web::MouseEvent| {
            if !is_hidden(&doc) {
                log::info!("[intro] skipped");
                hide(&doc);
            }
        });
    }
}
