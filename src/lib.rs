// Copyright 2025 Cowboy AI, LLC.

//! # CIM Railway
//!
//! Railway-oriented result types for the Composable Information Machine.
//!
//! This crate provides small, immutable two-variant value types that replace
//! panic- and exception-driven control flow with values:
//! - **Either**: a disjoint union of two alternatives, no failure semantics
//! - **Railway**: failure/success with short-circuit chaining
//! - **Try**: captures errors *and panics* raised by fallible code, with an
//!   explicit empty-success state
//! - **TryFuture**: blocking accessors over a running task that report
//!   through `Try`
//!
//! ## Design Principles
//!
//! 1. **Closed Sum Types**: exactly two variants, no third state
//! 2. **Immutability**: every combinator returns a new value
//! 3. **Once Failed, Stays Failed**: chained steps after a failure never run
//! 4. **Capture at the Combinator**: callbacks need no wrapping of their own
//! 5. **Boundaries Propagate**: `fold` and `map_to_either` apply their
//!    mappers unguarded
//!
//! ```rust
//! use cim_railway::Try;
//!
//! let outcome = Try::call(|| Ok("41".parse::<i32>()?))
//!     .map_success_when_present(|n| Ok(n + 1))
//!     .map_failure_to_success(|_| Ok(0));
//! assert_eq!(outcome, Try::success(42));
//! ```

#![warn(missing_docs)]

mod capture;
mod cause;
mod either;
mod errors;
mod executor;
mod railway;
mod try_future;
mod try_value;

pub use cause::Cause;
pub use either::{Either, HasEither};
pub use errors::{TryError, TryResult};
pub use executor::{Executor, ExecutorConfig, Job, RuntimeExecutor};
pub use railway::{HasRailway, Railway};
pub use try_future::TryFuture;
pub use try_value::Try;
