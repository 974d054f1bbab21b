//! Reusable modifier test fixtures.
//!
//! - [`RecordingModifier`]: appends every lifecycle call to a shared
//!   [`LifecycleLog`] and returns a fixed status from `update`.
//! - [`CountingModifier`]: returns the number of updates so far as status.

use std::cell::RefCell;
use std::rc::Rc;

use slotkit_core::Modifier;

/// One lifecycle call, tagged with the modifier's name hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Init(u32),
    Update(u32),
    Release(u32),
}

/// Shared, cloneable record of lifecycle calls.
///
/// Keep one clone in the test and hand others to modifiers; the test can
/// inspect the calls after the modifiers have been boxed and moved away.
#[derive(Clone, Debug, Default)]
pub struct LifecycleLog {
    events: Rc<RefCell<Vec<LifecycleEvent>>>,
}

impl LifecycleLog {
    pub fn push(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of all recorded calls, oldest first.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Records `init` / `update` / `release` calls into a [`LifecycleLog`].
pub struct RecordingModifier {
    name_hash: u32,
    status: i32,
    log: LifecycleLog,
}

impl RecordingModifier {
    pub fn new(name_hash: u32, log: LifecycleLog) -> Self {
        Self {
            name_hash,
            status: 0,
            log,
        }
    }

    /// Status code returned from every `update`.
    pub fn with_status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }
}

impl Modifier for RecordingModifier {
    fn name_hash(&self) -> u32 {
        self.name_hash
    }

    fn init(&mut self) {
        self.log.push(LifecycleEvent::Init(self.name_hash));
    }

    fn update(&mut self) -> i32 {
        self.log.push(LifecycleEvent::Update(self.name_hash));
        self.status
    }

    fn release(&mut self) {
        self.log.push(LifecycleEvent::Release(self.name_hash));
    }
}

/// Returns 1, 2, 3, ... from successive `update` calls.
///
/// `init` resets the count; `release` marks the modifier released so
/// tests can assert on it through [`is_released`](Self::is_released).
#[derive(Debug, Default)]
pub struct CountingModifier {
    pub name_hash: u32,
    updates: i32,
    released: bool,
}

impl CountingModifier {
    pub fn new(name_hash: u32) -> Self {
        Self {
            name_hash,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> i32 {
        self.updates
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Modifier for CountingModifier {
    fn name_hash(&self) -> u32 {
        self.name_hash
    }

    fn init(&mut self) {
        self.updates = 0;
        self.released = false;
    }

    fn update(&mut self) -> i32 {
        self.updates += 1;
        self.updates
    }

    fn release(&mut self) {
        self.released = true;
    }
}
