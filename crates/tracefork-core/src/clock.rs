use instant::Instant;

/// Monotonic millisecond clock anchored at session start.
///
/// `instant::Instant` maps to `performance.now()` on wasm and to
/// `std::time::Instant` natively, so both front-ends share one time base.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    origin: Instant,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
