use tracefork_core::ModeId;

// ---------------- Navigation helpers ----------------

/// Mode named by a navigation anchor: `#focus`, `/#flow`, or a bare `neural`.
#[inline]
pub fn mode_from_href(href: &str) -> Option<ModeId> {
    let fragment = match href.rfind('#') {
        Some(i) => &href[i + 1..],
        None => href,
    };
    fragment.trim().parse::<ModeId>().ok()
}

#[inline]
pub fn mode_for_key(key: &str) -> Option<ModeId> {
    match key {
        "1" => Some(ModeId::Explorer),
        "2" => Some(ModeId::Focus),
        "3" => Some(ModeId::Flow),
        "4" => Some(ModeId::Neural),
        _ => None,
    }
}

/// Next mode in table order, wrapping around.
#[inline]
pub fn cycle_mode(current: ModeId) -> ModeId {
    let all = ModeId::ALL;
    let i = all.iter().position(|m| *m == current).unwrap_or(0);
    all[(i + 1) % all.len()]
}

// ---------------- Hover timing ----------------

/// Measures how long the pointer stays on one element.
#[derive(Default, Clone, Debug)]
pub struct HoverTracker {
    active: Option<(String, f64)>,
}

impl HoverTracker {
    /// Start timing `element`. Returns the finished hover on the previous
    /// element, if the pointer moved straight from one to another.
    pub fn enter(&mut self, element: &str, now_ms: f64) -> Option<(String, f32)> {
        if matches!(&self.active, Some((el, _)) if el == element) {
            return None;
        }
        let finished = self.leave(now_ms);
        self.active = Some((element.to_string(), now_ms));
        finished
    }

    pub fn leave(&mut self, now_ms: f64) -> Option<(String, f32)> {
        let (el, started) = self.active.take()?;
        let duration = (now_ms - started).max(0.0) as f32;
        Some((el, duration))
    }
}

// ---------------- Page lifecycle ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLifecycle {
    /// Page is unloading for good.
    Dispose,
    /// Page is entering the back/forward cache; keep the session.
    Suspend,
    /// Page came back from the back/forward cache.
    Resume,
    Ignore,
}

#[inline]
pub fn page_lifecycle(event: &str, persisted: bool) -> PageLifecycle {
    match (event, persisted) {
        ("pagehide", false) => PageLifecycle::Dispose,
        ("pagehide", true) => PageLifecycle::Suspend,
        ("pageshow", true) => PageLifecycle::Resume,
        _ => PageLifecycle::Ignore,
    }
}
