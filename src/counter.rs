//! Logical clock used to fence delayed callbacks.

/// Snapshot of the interaction counter taken when a callback is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub u64);

/// Monotonically increasing count of pointer interactions.
///
/// Every mouse-over, mouse-move and mouse-out bumps the counter. A delayed
/// action captures the value it was scheduled under and applies only if the
/// counter has not moved since; later interaction makes it stale.
#[derive(Debug, Clone, Default)]
pub struct InteractionCounter {
    value: u64,
}

impl InteractionCounter {
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Advances the counter and returns the new value.
    pub fn bump(&mut self) -> Tick {
        self.value = self.value.wrapping_add(1);
        Tick(self.value)
    }

    /// Returns the current value.
    pub fn current(&self) -> Tick {
        Tick(self.value)
    }

    /// True when no interaction happened since `tick` was taken.
    pub fn is_current(&self, tick: Tick) -> bool {
        tick.0 == self.value
    }
}
