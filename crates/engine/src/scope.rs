//! Deferral scope: the per-invocation queue of deferred actions
//!
//! A [`DeferScope`] is created by the orchestrator for a single invocation
//! and handed to the primary action by mutable reference. The primary action
//! appends deferred actions with [`DeferScope::register`]; once it returns,
//! the orchestrator drains the queue back-to-front. The scope is never
//! reachable outside the primary action, so late registration (from inside a
//! deferred action, or from unrelated code) is a compile error rather than a
//! runtime one.

use std::fmt;

use epilog_core::Result;

use crate::recovery::RecoveryScope;

/// A deferred unit of work.
///
/// Invoked with the invocation's [`RecoveryScope`] during the drain. A
/// returned `Err` aborts the remaining drain and propagates to the caller
/// of `invoke`.
pub type DeferredAction<'env> = Box<dyn FnOnce(&mut RecoveryScope) -> Result<()> + 'env>;

/// Ordered queue of deferred actions for one invocation.
///
/// Registration order is preserved; the orchestrator pops from the tail, so
/// actions run in exactly the reverse of the order they were registered.
pub struct DeferScope<'env> {
    actions: Vec<DeferredAction<'env>>,
}

impl<'env> DeferScope<'env> {
    /// Create an empty scope. Only the orchestrator builds these.
    pub(crate) fn new() -> Self {
        DeferScope {
            actions: Vec::new(),
        }
    }

    /// Append a deferred action to the tail of the queue.
    pub fn register<F>(&mut self, action: F)
    where
        F: FnOnce(&mut RecoveryScope) -> Result<()> + 'env,
    {
        self.actions.push(Box::new(action));
    }

    /// Whether any actions remain to drain.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of actions currently registered and not yet drained.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Remove and return the most recently registered action.
    ///
    /// Returns `None` once the queue is empty, ending the drain.
    pub(crate) fn pop_last(&mut self) -> Option<DeferredAction<'env>> {
        self.actions.pop()
    }
}

impl fmt::Debug for DeferScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferScope")
            .field("pending", &self.actions.len())
            .finish()
    }
}
