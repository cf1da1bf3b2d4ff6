// Copyright 2025 Cowboy AI, LLC.

//! Error types for wrong-variant access
//!
//! Public combinators never produce these. They are returned by the
//! module-private payload accessors of [`Maybe`](crate::Maybe) and
//! [`Either`](crate::Either), which every combinator consults only after
//! deciding which variant it is looking at.

use thiserror::Error;

/// Precondition violations raised by the internal payload accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum VariantError {
    /// A payload accessor was invoked on the variant that carries no payload
    #[error("wrong-variant access: {accessor}")]
    WrongVariant {
        /// Name of the offending accessor, e.g. `Absent.get()`
        accessor: &'static str,
    },
}

/// Result type for the internal payload accessors
pub(crate) type VariantResult<T> = Result<T, VariantError>;

impl VariantError {
    /// Build a wrong-variant error and record it at trace level
    pub(crate) fn wrong_variant(accessor: &'static str) -> Self {
        tracing::trace!(accessor, "wrong-variant access");
        VariantError::WrongVariant { accessor }
    }
}
