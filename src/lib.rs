//! Epilog - deferred execution with recoverable failure
//!
//! A primary action runs with a deferral scope and may register actions to
//! run after it finishes. Deferred actions run in reverse registration
//! order, whether the primary action returned or failed, and may consume
//! the propagating failure exactly once. A failure nobody consumes is
//! re-raised to the caller as the same value, never a wrapped one.
//!
//! # Quick Start
//!
//! ```
//! use epilog::{invoke, Failure, Outcome};
//!
//! // Cleanup runs innermost-first, like nested resource release.
//! let outcome = invoke(|scope| {
//!     scope.register(|_| {
//!         // release the outer resource
//!         Ok(())
//!     });
//!     scope.register(|_| {
//!         // release the inner resource, before the outer one
//!         Ok(())
//!     });
//!     Ok("work finished")
//! })?;
//! assert_eq!(outcome, Outcome::Completed("work finished"));
//!
//! // A deferred action can inspect and consume a failure.
//! let outcome = invoke::<(), _>(|scope| {
//!     scope.register(|recovery| {
//!         if let Some(failure) = recovery.take() {
//!             eprintln!("recovered: {failure}");
//!         }
//!         Ok(())
//!     });
//!     Err(Failure::msg("primary action failed"))
//! })?;
//! assert!(outcome.is_recovered());
//! # Ok::<(), epilog::Failure>(())
//! ```
//!
//! # Architecture
//!
//! The deferral scope and recovery scope live strictly within one call to
//! [`invoke`] and reach user code only as closure parameters, so the
//! ability to register or to take a failure exists exactly where it
//! should and nowhere else. Invocations nest freely; each gets its own
//! independent pair of scopes.

// Re-export the public API from the engine and core crates
pub use epilog_core::{Failure, Result};
pub use epilog_engine::{invoke, DeferScope, DeferredAction, Outcome, RecoveryScope};
