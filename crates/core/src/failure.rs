//! The opaque failure value carried through an invocation.
//!
//! A [`Failure`] wraps whatever error value a primary action raised. The
//! wrapper is deliberately opaque: the engine moves it from capture to
//! re-raise without cloning, wrapping, or summarizing, so the value the
//! caller sees is the value the primary action attached. Deferred actions
//! inspect the payload through [`Failure::is`] and [`Failure::downcast_ref`].
//!
//! `Failure` does not implement [`std::error::Error`] itself. That keeps the
//! blanket `From<E: Error>` conversion coherent, which is what lets primary
//! actions use `?` on ordinary error types.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Result type alias for epilog operations
pub type Result<T> = std::result::Result<T, Failure>;

/// Payload type backing [`Failure::msg`].
#[derive(Debug, Error)]
#[error("{0}")]
struct AdHocFailure(String);

/// An opaque, identity-preserving failure value.
///
/// Holds a boxed error payload attached by a primary action (or a deferred
/// action, for drain failures). The payload is only ever moved; two
/// observers of the same `Failure` see the same value.
pub struct Failure {
    inner: Box<dyn StdError + Send + Sync + 'static>,
}

impl Failure {
    /// Wrap an error value as a failure.
    pub fn new<E>(payload: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Failure {
            inner: Box::new(payload),
        }
    }

    /// Create an ad-hoc failure from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Failure::new(AdHocFailure(message.into()))
    }

    /// Check whether the payload is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrow the payload as type `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Move the payload out as type `E`.
    ///
    /// On a type mismatch the original failure is handed back unchanged, so
    /// a failed downcast never loses the value.
    pub fn downcast<E>(self) -> std::result::Result<E, Self>
    where
        E: StdError + 'static,
    {
        match self.inner.downcast::<E>() {
            Ok(payload) => Ok(*payload),
            Err(inner) => Err(Failure { inner }),
        }
    }

    /// Unwrap the boxed payload.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.inner
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.inner).finish()
    }
}

// Lets primary actions use `?` on ordinary error types. `Failure` must not
// implement `Error` itself or this impl would overlap the reflexive one.
impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(payload: E) -> Self {
        Failure::new(payload)
    }
}
