//! Slot array configuration parameters.

/// Sizing parameters for a [`SlotArray`](crate::SlotArray).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotArrayConfig {
    /// Number of free slots allocated up front.
    ///
    /// Default: 4. Zero is allowed; the first `add` then grows the array
    /// (or fails, if growth is disabled).
    pub initial_capacity: usize,

    /// Number of free slots appended each time the array runs out of room.
    ///
    /// Default: 4. Zero disables growth: `add` on a full array returns
    /// [`Full`](slotkit_core::Full) instead.
    pub growth_step: usize,
}

impl SlotArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Default growth step.
    pub const DEFAULT_GROWTH_STEP: usize = 4;

    /// Create a config with explicit sizing.
    pub fn new(initial_capacity: usize, growth_step: usize) -> Self {
        Self {
            initial_capacity,
            growth_step,
        }
    }

    /// A config whose arrays never grow past `capacity`.
    pub fn fixed(capacity: usize) -> Self {
        Self::new(capacity, 0)
    }

    /// Whether arrays built from this config may grow.
    pub fn grows(&self) -> bool {
        self.growth_step > 0
    }
}

impl Default for SlotArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY, Self::DEFAULT_GROWTH_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_four_and_four() {
        let config = SlotArrayConfig::default();
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.growth_step, 4);
        assert!(config.grows());
    }

    #[test]
    fn fixed_disables_growth() {
        let config = SlotArrayConfig::fixed(16);
        assert_eq!(config.initial_capacity, 16);
        assert!(!config.grows());
    }
}
