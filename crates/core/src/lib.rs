//! Core types for the epilog deferral engine
//!
//! This crate defines the foundational types shared by the engine and its
//! callers:
//! - Failure: the opaque, identity-preserving failure value
//! - Result: result alias used across the workspace
//!
//! The engine itself (deferral scope, recovery scope, orchestrator) lives in
//! `epilog-engine`; this crate stays free of control flow so payload types
//! can be shared without pulling in the runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod failure;

pub use failure::{Failure, Result};
