//! Passive polling timer.
//!
//! A [`PassiveTimer`] never fires on its own. The owner polls
//! [`has_timed_out`](PassiveTimer::has_timed_out) with the current time,
//! typically once per frame, and the timer either stops or restarts when
//! it reports a timeout.
//!
//! All methods that depend on time take `now_ms` explicitly. Read it from a
//! [`Clock`](slotkit_core::Clock).

/// Frame duration, in milliseconds, for a loop locked to 60 frames per second.
pub const FRAME_SPEED_LOCK_MS: f32 = 16.67;

/// A timer that reports expiry when polled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassiveTimer {
    started: bool,
    last_time_ms: u64,
    duration_ms: u64,
    auto_reset: bool,
}

impl PassiveTimer {
    /// A stopped timer with zero duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer of `duration_ms`, started at `now_ms`.
    pub fn started_at(duration_ms: u64, now_ms: u64) -> Self {
        let mut timer = Self::new();
        timer.set_duration(duration_ms);
        timer.start(now_ms);
        timer
    }

    /// Change the duration without touching the running state.
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Current duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Restart automatically on timeout instead of stopping.
    pub fn set_auto_reset(&mut self, auto_reset: bool) {
        self.auto_reset = auto_reset;
    }

    /// Whether the timer restarts on timeout.
    pub fn auto_reset(&self) -> bool {
        self.auto_reset
    }

    /// Whether the timer is running.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Whether the timer is stopped.
    pub fn has_stopped(&self) -> bool {
        !self.started
    }

    /// Start (or restart) counting from `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.last_time_ms = now_ms;
        self.started = true;
    }

    /// Restart with the current duration.
    pub fn reset(&mut self, now_ms: u64) {
        self.start(now_ms);
    }

    /// Stop the timer. A stopped timer never times out.
    pub fn stop(&mut self) {
        self.started = false;
    }

    /// Milliseconds since the timer was last started.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_time_ms)
    }

    /// Milliseconds until the timer times out, or 0 if already past.
    pub fn time_left_ms(&self, now_ms: u64) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms(now_ms))
    }

    /// Poll the timer.
    ///
    /// Returns `true` once more than the duration has elapsed since the
    /// last start. On that poll an auto-reset timer restarts at `now_ms`;
    /// any other timer stops. Stopped timers and zero-duration timers never
    /// time out.
    pub fn has_timed_out(&mut self, now_ms: u64) -> bool {
        if !self.started || self.duration_ms == 0 {
            return false;
        }
        if self.elapsed_ms(now_ms) <= self.duration_ms {
            return false;
        }
        if self.auto_reset {
            self.last_time_ms = now_ms;
        } else {
            self.started = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotkit_core::Clock;
    use slotkit_test_utils::ManualClock;

    #[test]
    fn new_timer_is_stopped() {
        let mut timer = PassiveTimer::new();
        assert!(timer.has_stopped());
        assert!(!timer.has_timed_out(1_000_000));
    }

    #[test]
    fn fires_only_after_duration_strictly_exceeded() {
        let clock = ManualClock::new(1_000);
        let mut timer = PassiveTimer::started_at(100, clock.now_ms());

        clock.advance(100);
        assert!(!timer.has_timed_out(clock.now_ms()));
        clock.advance(1);
        assert!(timer.has_timed_out(clock.now_ms()));
        assert!(timer.has_stopped());
        // Stopped after firing once.
        clock.advance(500);
        assert!(!timer.has_timed_out(clock.now_ms()));
    }

    #[test]
    fn auto_reset_restarts_at_poll_time() {
        let clock = ManualClock::new(0);
        let mut timer = PassiveTimer::started_at(10, clock.now_ms());
        timer.set_auto_reset(true);

        clock.set(15);
        assert!(timer.has_timed_out(clock.now_ms()));
        assert!(timer.has_started());
        assert_eq!(timer.elapsed_ms(clock.now_ms()), 0);

        clock.set(25);
        assert!(!timer.has_timed_out(clock.now_ms()));
        clock.set(26);
        assert!(timer.has_timed_out(clock.now_ms()));
    }

    #[test]
    fn zero_duration_never_fires() {
        let mut timer = PassiveTimer::started_at(0, 0);
        assert!(timer.has_started());
        assert!(!timer.has_timed_out(u64::MAX));
    }

    #[test]
    fn set_duration_does_not_start() {
        let mut timer = PassiveTimer::new();
        timer.set_duration(5);
        assert!(timer.has_stopped());
        assert!(!timer.has_timed_out(100));
        timer.start(100);
        assert!(timer.has_timed_out(106));
    }

    #[test]
    fn reset_restarts_from_now() {
        let mut timer = PassiveTimer::started_at(50, 0);
        timer.reset(40);
        assert!(!timer.has_timed_out(80));
        assert!(timer.has_timed_out(91));
    }

    #[test]
    fn stop_suppresses_timeout() {
        let mut timer = PassiveTimer::started_at(1, 0);
        timer.stop();
        assert!(!timer.has_timed_out(10));
    }

    #[test]
    fn time_left_saturates() {
        let timer = PassiveTimer::started_at(30, 100);
        assert_eq!(timer.time_left_ms(110), 20);
        assert_eq!(timer.time_left_ms(200), 0);
        // A clock reading before the start counts as zero elapsed.
        assert_eq!(timer.elapsed_ms(50), 0);
    }

    #[test]
    fn frame_lock_is_sixty_hz() {
        assert!((1000.0 / FRAME_SPEED_LOCK_MS - 60.0).abs() < 0.1);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn one_shot_fires_at_most_once(
                duration in 1u64..1_000,
                steps in proptest::collection::vec(0u64..200, 1..50),
            ) {
                let mut timer = PassiveTimer::started_at(duration, 0);
                let mut now = 0;
                let mut fired = 0;
                for step in steps {
                    now += step;
                    if timer.has_timed_out(now) {
                        fired += 1;
                        prop_assert!(now > duration);
                    }
                }
                prop_assert!(fired <= 1);
            }
        }
    }
}
