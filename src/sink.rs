//! Shared result type for renderer boundary writes.

/// Outcome of one attribute write to an external renderer.
///
/// Sinks report [`NotReady`](Self::NotReady) while their target layer or
/// object has not been created yet; controllers skip the value and retry
/// on a later update instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkWrite {
    /// The value reached the renderer.
    Applied,
    /// The target does not exist yet; retry on a later update.
    NotReady,
}

impl SinkWrite {
    /// Whether the write reached the renderer.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
