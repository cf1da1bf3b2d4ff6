// Copyright 2025 Cowboy AI, LLC.

//! Either - the outcome of a computation that can fail
//!
//! [`Either<E, T>`] is a disjoint union: [`Either::Failure`] carries an
//! error or alternative value, [`Either::Success`] carries the result.
//! A failure is represented, never raised; callers compose with
//! [`Either::map`], [`Either::flat_map`] and [`Either::fold`].
//!
//! ```rust
//! use cim_fp::Either;
//!
//! fn try_parse_int(input: &str) -> Either<String, i64> {
//!     input
//!         .parse::<i64>()
//!         .map_err(|_| "not a number".to_string())
//!         .into()
//! }
//!
//! assert_eq!(try_parse_int("42").get_or_else(0), 42);
//! assert_eq!(try_parse_int("WAT").swap().get_or_else(String::new()), "not a number");
//! ```

use crate::errors::{VariantError, VariantResult};
use crate::fallback::Fallback;
use crate::maybe::{IntoIter, Iter, Maybe};

/// Either a failure value of type `E` or a success value of type `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<E, T> {
    /// Left side: the error or alternative value
    Failure(E),
    /// Right side: the success value
    Success(T),
}

/// Build a successful outcome
pub fn success<E, T>(value: T) -> Either<E, T> {
    Either::Success(value)
}

/// Build a failed outcome
pub fn failure<E, T>(error: E) -> Either<E, T> {
    Either::Failure(error)
}

impl<E, T> Either<E, T> {
    /// `Success(on_success)` if `test` holds, otherwise `Failure(on_failure)`
    ///
    /// ```rust
    /// use cim_fp::{failure, success, Either};
    ///
    /// assert_eq!(Either::cond(true, 42, 13), success(42));
    /// assert_eq!(Either::cond(false, 42, 13), failure(13));
    /// ```
    pub fn cond(test: bool, on_success: T, on_failure: E) -> Self {
        if test {
            Either::Success(on_success)
        } else {
            Either::Failure(on_failure)
        }
    }

    /// Success payload accessor; fails on `Failure`
    #[allow(dead_code)]
    fn success_ref(&self) -> VariantResult<&T> {
        match self {
            Either::Success(value) => Ok(value),
            Either::Failure(_) => Err(VariantError::wrong_variant("Failure.success()")),
        }
    }

    /// Failure payload accessor; fails on `Success`
    #[allow(dead_code)]
    fn failure_ref(&self) -> VariantResult<&E> {
        match self {
            Either::Failure(error) => Ok(error),
            Either::Success(_) => Err(VariantError::wrong_variant("Success.failure()")),
        }
    }

    /// Returns true for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    /// Returns true for `Failure`
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Apply `on_failure` or `on_success`, whichever matches
    pub fn fold<U, F, S>(self, on_failure: F, on_success: S) -> U
    where
        F: FnOnce(E) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Either::Failure(error) => on_failure(error),
            Either::Success(value) => on_success(value),
        }
    }

    /// Exchange the two sides
    pub fn swap(self) -> Either<T, E> {
        match self {
            Either::Failure(error) => Either::Success(error),
            Either::Success(value) => Either::Failure(value),
        }
    }

    /// Transform the success payload
    pub fn map<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Either::Failure(error) => Either::Failure(error),
            Either::Success(value) => Either::Success(f(value)),
        }
    }

    /// Transform the failure payload
    pub fn map_left<E2, F>(self, f: F) -> Either<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Either::Failure(error) => Either::Failure(f(error)),
            Either::Success(value) => Either::Success(value),
        }
    }

    /// Chain a computation that may itself fail
    pub fn flat_map<U, F>(self, f: F) -> Either<E, U>
    where
        F: FnOnce(T) -> Either<E, U>,
    {
        match self {
            Either::Failure(error) => Either::Failure(error),
            Either::Success(value) => f(value),
        }
    }

    /// Run `f` on the success payload, if any, and hand the container back
    pub fn foreach<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Either::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the failure payload, if any, and hand the container back
    pub fn foreach_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Either::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the success payload, or resolves `default` on failure
    pub fn get_or_else<'a, D>(self, default: D) -> T
    where
        D: Into<Fallback<'a, T>>,
    {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => default.into().resolve(),
        }
    }

    /// Returns the success payload, or the result of `producer` on failure
    pub fn get_or_else_with<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.get_or_else(Fallback::lazy(producer))
    }

    /// Returns true if this is a `Success` equal to `elem`
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Either::Success(value) => value == elem,
            Either::Failure(_) => false,
        }
    }

    /// Returns true if this is a `Failure` equal to `elem`
    pub fn contains_left(&self, elem: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Either::Failure(error) => error == elem,
            Either::Success(_) => false,
        }
    }

    /// False on `Failure`, otherwise the predicate's verdict on the payload
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Either::Success(value) => predicate(value),
            Either::Failure(_) => false,
        }
    }

    /// False on `Success`, otherwise the predicate's verdict on the failure
    pub fn exists_left<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Either::Failure(error) => predicate(error),
            Either::Success(_) => false,
        }
    }

    /// Keep a success only if `predicate` holds; otherwise fail with `zero`
    ///
    /// A `Failure` passes through untouched: the predicate is not evaluated
    /// and `zero` is not resolved.
    ///
    /// ```rust
    /// use cim_fp::{failure, success, Either};
    ///
    /// let twelve: Either<i32, i32> = success(12);
    /// assert_eq!(twelve.filter_or_else(|x| *x > 10, -1), success(12));
    /// assert_eq!(twelve.filter_or_else(|x| *x < 10, -1), failure(-1));
    /// ```
    pub fn filter_or_else<'a, P, Z>(self, predicate: P, zero: Z) -> Self
    where
        P: FnOnce(&T) -> bool,
        Z: Into<Fallback<'a, E>>,
    {
        match self {
            Either::Success(value) => {
                if predicate(&value) {
                    Either::Success(value)
                } else {
                    Either::Failure(zero.into().resolve())
                }
            }
            Either::Failure(error) => Either::Failure(error),
        }
    }

    /// `Present` with the success payload, `Absent` on failure
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Either::Success(value) => Maybe::Present(value),
            Either::Failure(_) => Maybe::Absent,
        }
    }

    /// Iterate over the zero or one success payload by reference
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Either::Success(value) => Iter::new(Some(value)),
            Either::Failure(_) => Iter::new(None),
        }
    }
}

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::Success(value),
            Err(error) => Either::Failure(error),
        }
    }
}

impl<E, T> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Success(value) => Ok(value),
            Either::Failure(error) => Err(error),
        }
    }
}

impl<E, T> IntoIterator for Either<E, T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.to_maybe().or_null())
    }
}

impl<'a, E, T> IntoIterator for &'a Either<E, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
