// Copyright 2025 Cowboy AI, LLC.

//! Default-value resolution
//!
//! `get_or_else`-style operations accept either a concrete value or a
//! zero-argument producer through one parameter type, [`Fallback`].
//!
//! ```rust
//! use cim_fp::{absent, Fallback, Maybe};
//!
//! let none: Maybe<u32> = absent();
//! assert_eq!(none.get_or_else(7), 7);
//! assert_eq!(none.get_or_else(Fallback::lazy(|| 6 * 7)), 42);
//! ```
//!
//! The producer runs at most once, and only when the container has no
//! value to hand out.

use std::fmt;

/// Producer type stored by [`Fallback::Lazy`]
pub type Producer<'a, A> = Box<dyn FnOnce() -> A + 'a>;

/// A default value, supplied eagerly or through a deferred producer
pub enum Fallback<'a, A> {
    /// Already-computed value
    Value(A),
    /// Producer invoked on resolution
    Lazy(Producer<'a, A>),
}

impl<'a, A> Fallback<'a, A> {
    /// Wrap an already-computed value
    pub fn value(value: A) -> Self {
        Fallback::Value(value)
    }

    /// Defer computation to `producer`
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> A + 'a,
    {
        Fallback::Lazy(Box::new(producer))
    }

    /// Returns true for the deferred form
    pub fn is_lazy(&self) -> bool {
        matches!(self, Fallback::Lazy(_))
    }

    /// Produce the concrete value, invoking the producer if there is one
    pub fn resolve(self) -> A {
        match self {
            Fallback::Value(value) => value,
            Fallback::Lazy(producer) => {
                tracing::trace!("resolving lazy fallback");
                producer()
            }
        }
    }
}

impl<'a, A> From<A> for Fallback<'a, A> {
    fn from(value: A) -> Self {
        Fallback::Value(value)
    }
}

impl<A: fmt::Debug> fmt::Debug for Fallback<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Resolve anything convertible into a [`Fallback`]
pub fn resolve<'a, A, D>(fallback: D) -> A
where
    D: Into<Fallback<'a, A>>,
{
    fallback.into().resolve()
}
