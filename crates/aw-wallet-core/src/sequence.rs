use std::cell::Cell;

/// Token captured by a refresh when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

/// Monotonic counter deciding which of several overlapping refreshes may
/// commit: only the one holding the most recently issued token.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    latest: Cell<u64>,
}

impl RefreshSequence {
    pub fn begin(&self) -> RefreshToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RefreshToken(next)
    }

    pub fn is_current(&self, token: RefreshToken) -> bool {
        self.latest.get() == token.0
    }
}
