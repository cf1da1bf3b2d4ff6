// Copyright 2025 Cowboy AI, LLC.

//! Helpers bridging std collections into [`Maybe`]

use crate::maybe::{maybe, Maybe};

/// First element of `items` matching `predicate`, or `Absent`
pub fn find<T, P>(items: &[T], mut predicate: P) -> Maybe<&T>
where
    P: FnMut(&T) -> bool,
{
    maybe(items.iter().find(|item| predicate(item)))
}
