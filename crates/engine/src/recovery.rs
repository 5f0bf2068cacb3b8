//! Recovery scope: the single-slot holder for the in-flight failure
//!
//! A [`RecoveryScope`] is seeded exactly once, at drain start, with the
//! failure captured from the primary action (or with no failure at all).
//! Each deferred action receives it by mutable reference and may consume the
//! failure with [`RecoveryScope::take`]. The slot is never re-armed: after
//! the first successful take, every later take observes `None`.

use epilog_core::Failure;

/// Single-slot holder for the failure propagating through a drain.
#[derive(Debug)]
pub struct RecoveryScope {
    slot: Option<Failure>,
}

impl RecoveryScope {
    /// Build a scope seeded with the captured failure, if any. Only the
    /// orchestrator builds these, once per invocation.
    pub(crate) fn seeded(failure: Option<Failure>) -> Self {
        RecoveryScope { slot: failure }
    }

    /// Return the current failure and empty the slot.
    ///
    /// The first call after a failure seed yields that failure; every call
    /// after that (and every call when nothing was seeded) yields `None`.
    pub fn take(&mut self) -> Option<Failure> {
        self.slot.take()
    }

    /// Whether the slot currently holds no failure, either because none was
    /// seeded or because a deferred action already took it.
    pub fn is_consumed(&self) -> bool {
        self.slot.is_none()
    }
}
