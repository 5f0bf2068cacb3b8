//! Invocation orchestration
//!
//! [`invoke`] ties the two scopes together. Each invocation passes through
//! three phases exactly once, in order:
//!
//! 1. Run the primary action against a fresh [`DeferScope`], capturing any
//!    failure it raises.
//! 2. Drain the scope back-to-front, handing each deferred action the
//!    [`RecoveryScope`] seeded with the captured failure.
//! 3. Decide propagation: re-raise the failure if nothing consumed it,
//!    otherwise return normally.
//!
//! The drain always runs in full after the primary action, whether it
//! returned or failed. The one exception is a failure raised by a deferred
//! action itself: that propagates immediately, and actions not yet popped
//! never run.

use epilog_core::Result;
use tracing::trace;

use crate::recovery::RecoveryScope;
use crate::scope::DeferScope;

/// How an invocation concluded when no failure propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The primary action returned a value normally.
    Completed(T),
    /// The primary action failed, but a deferred action consumed the
    /// failure. There is no value to return: deferred actions cannot
    /// substitute one.
    Recovered,
}

impl<T> Outcome<T> {
    /// The primary action's value, if it completed normally.
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Recovered => None,
        }
    }

    /// Whether a deferred action consumed the primary action's failure.
    pub fn is_recovered(&self) -> bool {
        matches!(self, Outcome::Recovered)
    }
}

/// Run a primary action with a fresh deferral scope, then drain the scope.
///
/// The primary action receives the invocation's [`DeferScope`] and may
/// register deferred actions at any point before it returns or fails.
/// Deferred actions run in reverse registration order, each with access to
/// the invocation's [`RecoveryScope`]. A failure raised by the primary
/// action is re-raised (the same value, not a wrapped one) unless some
/// deferred action takes it.
///
/// Invocations nest freely: a primary or deferred action that calls
/// `invoke` again gets its own independent pair of scopes.
///
/// # Returns
/// * `Ok(Outcome::Completed(value))` - primary action returned normally
/// * `Ok(Outcome::Recovered)` - primary action failed, failure consumed
/// * `Err(failure)` - the primary action's failure, unconsumed, or a
///   failure raised by a deferred action during the drain
///
/// # Examples
///
/// ```
/// use epilog_engine::{invoke, Outcome};
/// use epilog_core::Failure;
///
/// let outcome = invoke(|scope| {
///     scope.register(|_| Ok(()));
///     Ok("done")
/// })?;
/// assert_eq!(outcome, Outcome::Completed("done"));
///
/// // A deferred action may consume a failure raised by the primary action.
/// let outcome = invoke::<(), _>(|scope| {
///     scope.register(|recovery| {
///         let _ = recovery.take();
///         Ok(())
///     });
///     Err(Failure::msg("boom"))
/// })?;
/// assert_eq!(outcome, Outcome::Recovered);
/// # Ok::<(), Failure>(())
/// ```
pub fn invoke<'env, T, F>(primary: F) -> Result<Outcome<T>>
where
    F: FnOnce(&mut DeferScope<'env>) -> Result<T>,
{
    let mut scope = DeferScope::new();

    let (value, captured) = match primary(&mut scope) {
        Ok(value) => (Some(value), None),
        Err(failure) => (None, Some(failure)),
    };

    trace!(
        registered = scope.len(),
        failed = captured.is_some(),
        "primary action finished; draining deferred actions"
    );

    let mut recovery = RecoveryScope::seeded(captured);
    while let Some(action) = scope.pop_last() {
        trace!(remaining = scope.len(), "running deferred action");
        action(&mut recovery)?;
    }

    match recovery.take() {
        Some(failure) => {
            trace!(%failure, "failure survived the drain; re-raising");
            Err(failure)
        }
        None => match value {
            Some(value) => Ok(Outcome::Completed(value)),
            None => {
                trace!("failure consumed during drain");
                Ok(Outcome::Recovered)
            }
        },
    }
}
