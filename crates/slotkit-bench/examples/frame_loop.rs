//! Drive a `ModifierList` from a frame loop paced by a `PassiveTimer`.
//!
//! Run with `RUST_LOG=debug` to see attach/detach events.

use slotkit_core::{Clock, Modifier};
use slotkit_util::{
    count_digits, log_error, ModifierList, PassiveTimer, SystemClock, FRAME_SPEED_LOCK_MS,
};

/// Counts down and reports 1 once it reaches zero.
struct Countdown {
    name_hash: u32,
    remaining: u32,
}

impl Modifier for Countdown {
    fn name_hash(&self) -> u32 {
        self.name_hash
    }

    fn init(&mut self) {
        println!("countdown {:#x} armed at {}", self.name_hash, self.remaining);
    }

    fn update(&mut self) -> i32 {
        self.remaining = self.remaining.saturating_sub(1);
        i32::from(self.remaining == 0)
    }

    fn release(&mut self) {
        println!("countdown {:#x} released", self.name_hash);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let clock = SystemClock;
    let mut frame = PassiveTimer::started_at(FRAME_SPEED_LOCK_MS as u64, clock.now_ms());
    frame.set_auto_reset(true);

    let mut modifiers = ModifierList::new();
    for (name_hash, remaining) in [(0xA1, 3), (0xB2, 5), (0xC3, 8)] {
        if let Err(full) = modifiers.add(Box::new(Countdown {
            name_hash,
            remaining,
        })) {
            log_error("modifier rejected", Some(full.to_string().as_str()));
        }
    }

    let mut frames = 0u32;
    while !modifiers.is_empty() {
        if !frame.has_timed_out(clock.now_ms()) {
            std::thread::yield_now();
            continue;
        }
        frames += 1;
        for (index, status) in modifiers.update_all() {
            if status != 0 {
                modifiers.remove(index);
            }
        }
    }

    println!(
        "all modifiers finished after {frames} frames ({} digits)",
        count_digits(i64::from(frames))
    );
}
