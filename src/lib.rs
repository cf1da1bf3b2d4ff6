// Copyright 2025 Cowboy AI, LLC.

//! # CIM FP
//!
//! Value types for explicit absence and explicit failure.
//!
//! This crate provides two closed algebraic data types and the combinators
//! over them:
//! - **Maybe**: a value that is either `Present` or `Absent`
//! - **Either**: an outcome that is either a `Failure` or a `Success`
//! - **Fallback**: an eager or lazily produced default for `get_or_else`
//!
//! ## Design Principles
//!
//! 1. **Closed Variants**: exactly two variants per type, no third state
//! 2. **Immutability**: every combinator returns a new value
//! 3. **Represent, Don't Raise**: a `Failure` is data, not a panic
//! 4. **Laziness Where It Matters**: default producers run only on the empty branch
//!
//! ```rust
//! use cim_fp::{failure, maybe, success, Either, Fallback};
//!
//! fn validate_age(input: &str) -> Either<String, u32> {
//!     maybe(input.parse::<u32>().ok())
//!         .fold(
//!             || failure("Invalid input, the age should be a number.".to_string()),
//!             success,
//!         )
//!         .filter_or_else(
//!             |age| (14..=30).contains(age),
//!             Fallback::lazy(|| "The age should be in range between 14 and 30.".to_string()),
//!         )
//! }
//!
//! assert_eq!(validate_age("20"), success(20));
//! assert!(validate_age("WAT").is_failure());
//! assert!(validate_age("10").contains_left(&"The age should be in range between 14 and 30.".to_string()));
//! ```

#![warn(missing_docs)]

mod errors;
mod fallback;
mod utils;
pub mod either;
pub mod maybe;

pub use either::{failure, success, Either};
pub use fallback::{resolve, Fallback, Producer};
pub use maybe::{absent, maybe, present, Maybe};
pub use utils::find;
