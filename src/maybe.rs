// Copyright 2025 Cowboy AI, LLC.

//! Maybe - a value that may be absent
//!
//! [`Maybe<T>`] is a closed sum type with exactly two variants:
//! [`Maybe::Present`] holding one value, and [`Maybe::Absent`] holding none.
//! Client code builds one with [`present`], [`absent`] or the smart
//! constructor [`maybe`], then chains combinators instead of unwrapping.
//!
//! ```rust
//! use cim_fp::maybe;
//!
//! let countries = [("United States", 1), ("United Kingdom", 44)];
//! let lookup = |code: u32| {
//!     maybe(countries.iter().find(|(_, c)| *c == code))
//!         .map(|(name, _)| *name)
//!         .get_or_else("Not found")
//! };
//!
//! assert_eq!(lookup(44), "United Kingdom");
//! assert_eq!(lookup(7), "Not found");
//! ```
//!
//! # Functor Laws
//!
//! 1. Identity: `m.map(|x| x) == m`
//! 2. Composition: `m.map(f).map(g) == m.map(|x| g(f(x)))`

use std::iter::FusedIterator;

use crate::errors::{VariantError, VariantResult};
use crate::fallback::Fallback;

/// A value that is either present or absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Holds exactly one value
    Present(T),
    /// Holds nothing
    Absent,
}

/// Wrap a value that is known to exist
pub fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// The empty container
pub const fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}

/// Smart constructor: `None` becomes [`Maybe::Absent`], `Some(v)` becomes
/// [`Maybe::Present`]
///
/// This is the one place where a nullable input is normalized. Results of
/// [`Maybe::map`] and [`Maybe::flat_map`] are not re-checked.
pub fn maybe<T>(value: Option<T>) -> Maybe<T> {
    match value {
        Some(value) => Maybe::Present(value),
        None => Maybe::Absent,
    }
}

impl<T> Maybe<T> {
    /// Payload accessor; fails on `Absent`
    ///
    /// Combinators branch on the variant themselves, so the `Err` arm is
    /// only reachable through misuse.
    #[allow(dead_code)]
    fn get(&self) -> VariantResult<&T> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(VariantError::wrong_variant("Absent.get()")),
        }
    }

    /// Returns true if this is `Absent`
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns true if this is `Present`
    pub fn is_defined(&self) -> bool {
        !self.is_empty()
    }

    /// Alias of [`Maybe::is_defined`]
    pub fn non_empty(&self) -> bool {
        self.is_defined()
    }

    /// Returns the payload, or resolves `default` when absent
    ///
    /// A lazy default is only invoked on `Absent`:
    ///
    /// ```rust
    /// use cim_fp::{present, Fallback};
    ///
    /// let value = present(3).get_or_else(Fallback::lazy(|| -> i32 { unreachable!() }));
    /// assert_eq!(value, 3);
    /// ```
    pub fn get_or_else<'a, D>(self, default: D) -> T
    where
        D: Into<Fallback<'a, T>>,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default.into().resolve(),
        }
    }

    /// Returns the payload, or the result of `producer` when absent
    pub fn get_or_else_with<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.get_or_else(Fallback::lazy(producer))
    }

    /// Escape hatch for APIs that speak `Option`
    pub fn or_null(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// Borrow the payload without consuming the container
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Apply `f` to the payload
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that itself may produce nothing
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Evaluate `on_absent` or apply `on_present`, whichever matches
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Keep the payload only if `predicate` holds for it
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) => {
                if predicate(&value) {
                    Maybe::Present(value)
                } else {
                    Maybe::Absent
                }
            }
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the payload only if `predicate` does not hold for it
    pub fn filter_not<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Keep the payload only if it equals `literal`
    pub fn filter_equals(self, literal: &T) -> Maybe<T>
    where
        T: PartialEq,
    {
        self.filter(|value| value == literal)
    }

    /// Keep the payload only if it differs from `literal`
    pub fn filter_not_equals(self, literal: &T) -> Maybe<T>
    where
        T: PartialEq,
    {
        self.filter_not(|value| value == literal)
    }

    /// Returns true if present and equal to `elem`
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Maybe::Present(value) => value == elem,
            Maybe::Absent => false,
        }
    }

    /// Returns false if absent, otherwise the predicate's verdict
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) => predicate(value),
            Maybe::Absent => false,
        }
    }

    /// Returns true if absent, otherwise the predicate's verdict
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) => predicate(value),
            Maybe::Absent => true,
        }
    }

    /// Run `f` on the payload, if any
    pub fn foreach<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Maybe::Present(value) = self {
            f(value);
        }
    }

    /// Run `f` on the payload, if any, and hand the container back
    ///
    /// ```rust
    /// use cim_fp::present;
    ///
    /// let mut seen = Vec::new();
    /// let same = present(42)
    ///     .on_present(|v| seen.push(*v))
    ///     .on_absent(|| seen.push(-1));
    ///
    /// assert_eq!(same, present(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    pub fn on_present<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.foreach(f);
        self
    }

    /// Run `f` if absent, and hand the container back
    pub fn on_absent<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            f();
        }
        self
    }

    /// This container if present, otherwise `alternative`
    pub fn or_else(self, alternative: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => alternative,
        }
    }

    /// Iterate over the zero or one payload by reference
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Maybe::Present(value) => Iter::new(Some(value)),
            Maybe::Absent => Iter::new(None),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        maybe(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.or_null()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.or_null())
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over zero or one payload
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over zero or one payload
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
