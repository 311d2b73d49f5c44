//! A sticky boolean that is set by one event and consumed by another.

/// Once set, stays set until [`Latch::take`] or [`Latch::reset`].
///
/// Setting it again with a false condition does not clear it, so a pair of
/// "set if" events followed by a single "take" still sees the first one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    set: bool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_if(&mut self, condition: bool) {
        self.set |= condition;
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Returns the current value and clears the latch.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.set)
    }

    pub fn reset(&mut self) {
        self.set = false;
    }
}
