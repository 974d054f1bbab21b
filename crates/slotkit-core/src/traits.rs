//! Core abstraction traits for time sources and lifecycle hooks.

/// A monotonic millisecond time source.
///
/// Timers never read a global clock themselves; callers pass `now_ms()`
/// from whichever implementation suits them (a real clock in production,
/// a manual one in tests).
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin. Never decreases.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// A behaviour attached to an owner and driven through its lifecycle.
///
/// The owner calls [`init`](Modifier::init) once when the modifier is
/// attached, [`update`](Modifier::update) once per owner update while the
/// modifier is active, and [`release`](Modifier::release) once when it is
/// detached.
pub trait Modifier {
    /// Hash of the modifier's name, used for lookup by the owner.
    fn name_hash(&self) -> u32;

    /// Prepare the modifier. Called once, before the first update.
    fn init(&mut self);

    /// Advance the modifier by one owner update.
    ///
    /// The returned status code is opaque to the owner and passed back to
    /// whoever drives the update.
    fn update(&mut self) -> i32;

    /// Clean up the modifier. Called once, after the last update.
    fn release(&mut self);
}
