//! Deferral engine for epilog
//!
//! This crate holds the three runtime components of an invocation:
//! - DeferScope: the per-invocation queue of deferred actions
//! - RecoveryScope: the single-slot holder for the in-flight failure
//! - invoke: the orchestrator that runs a primary action and drains its
//!   deferrals in reverse registration order
//!
//! Both scope types are built only by the orchestrator and reach user code
//! strictly as closure parameters: the deferral scope inside the primary
//! action, the recovery scope inside each deferred action. There is no
//! ambient or global way to reach either one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod orchestrator;
pub mod recovery;
pub mod scope;

pub use orchestrator::{invoke, Outcome};
pub use recovery::RecoveryScope;
pub use scope::{DeferScope, DeferredAction};
