use std::time::Instant;

/// Monotonic time source for playback bookkeeping.
///
/// Readings are milliseconds since an arbitrary fixed origin; only
/// differences between readings are meaningful.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Production clock backed by `std::time::Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-stepped clock used by the playback and channel tests.
#[cfg(test)]
#[derive(Clone)]
pub struct ManualClock(std::rc::Rc<std::cell::Cell<u64>>);

#[cfg(test)]
impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(std::rc::Rc::new(std::cell::Cell::new(start_ms)))
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}
