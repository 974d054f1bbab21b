//! Process-local monotonic clock.

use std::sync::OnceLock;
use std::time::Instant;

use slotkit_core::Clock;

/// Returns monotonic milliseconds since an arbitrary process-local epoch.
///
/// The epoch is captured lazily on first call. NOT wall-clock time; only
/// meaningful for comparing against other values from this function.
pub fn monotonic_millis() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    Instant::now().duration_since(*epoch).as_millis() as u64
}

/// [`Clock`] backed by [`monotonic_millis`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        monotonic_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_goes_backwards() {
        let clock = SystemClock;
        let mut prev = clock.now_ms();
        for _ in 0..1000 {
            let now = clock.now_ms();
            assert!(now >= prev);
            prev = now;
        }
    }
}
