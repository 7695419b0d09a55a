// Copyright (c) 2025 - Cowboy AI, LLC.

//! Try: a Railway specialized for captured errors.
//!
//! `Try<T>` is either `Success(Option<T>)` or `Failure(Cause)`. A Success may
//! be *empty* ("ran, nothing to return"), which is a different state from a
//! Failure; [`Try::map_empty_to_failure`] turns one into the other where an
//! absent value is a defect.
//!
//! # Capturing versus Propagating
//!
//! | operations | callback `Err` / panic |
//! |---|---|
//! | `call`, `run`, `then*`, `or_call` | captured into a Failure |
//! | `map_*`, `flat_map_*`, `map_failure*` | captured into a Failure |
//! | `if_*` peeks, `accept` | captured; replaces the original state |
//! | `fold`, `map_to_either` | **not** captured; panics propagate |
//!
//! `fold` and `map_to_either` are boundary operations meant to run where
//! panics are already handled.
//!
//! Every mapping and peeking operation comes in up to three flavours that
//! differ in how the payload is presented:
//! - plain: the payload as `Option` (the callback sees presence)
//! - `_as_nullable`: the raw nullable payload, nullable out as well
//! - `_when_present`: the callback is skipped on an empty success

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capture::{capture, capture_value};
use crate::cause::Cause;
use crate::either::Either;
use crate::errors::TryError;
use crate::railway::Railway;

/// Outcome of a fallible computation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Try<T> {
    /// The computation ran; the payload may be absent
    Success(Option<T>),
    /// The computation raised
    Failure(Cause),
}

fn absent_value() -> Cause {
    Cause::new(TryError::no_such_element("success value is absent"))
}

impl<T> Try<T> {
    // ------------------------------------------------------------------
    // factories
    // ------------------------------------------------------------------

    /// Invoke `callable`, capturing an `Err` or a panic into a Failure.
    pub fn call<C>(callable: C) -> Self
    where
        C: FnOnce() -> Result<T, Cause>,
    {
        capture(callable).into()
    }

    /// As [`Try::call`], with `Ok(None)` producing an empty success.
    pub fn call_nullable<C>(callable: C) -> Self
    where
        C: FnOnce() -> Result<Option<T>, Cause>,
    {
        match capture(callable) {
            Ok(value) => Try::Success(value),
            Err(cause) => Try::Failure(cause),
        }
    }

    /// A Success holding `value`.
    pub fn success(value: T) -> Self {
        Try::Success(Some(value))
    }

    /// A Success holding a possibly absent value.
    pub fn success_nullable(value: Option<T>) -> Self {
        Try::Success(value)
    }

    /// A Success with no value.
    pub fn empty() -> Self {
        Try::Success(None)
    }

    /// A Failure carrying `cause`.
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Try::Failure(cause.into())
    }

    // ------------------------------------------------------------------
    // predicates and accessors
    // ------------------------------------------------------------------

    /// Whether the computation ran without raising (an empty success counts).
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Whether the computation raised.
    pub fn is_failure(&self) -> bool {
        matches!(self, Try::Failure(_))
    }

    /// The success value; `None` for a Failure and for an empty success.
    pub fn get_value(&self) -> Option<&T> {
        match self {
            Try::Success(value) => value.as_ref(),
            Try::Failure(_) => None,
        }
    }

    /// The captured cause, if any.
    pub fn get_failure(&self) -> Option<&Cause> {
        match self {
            Try::Failure(cause) => Some(cause),
            Try::Success(_) => None,
        }
    }

    /// Take the success value; `None` for a Failure and for an empty success.
    pub fn into_value(self) -> Option<T> {
        match self {
            Try::Success(value) => value,
            Try::Failure(_) => None,
        }
    }

    // ------------------------------------------------------------------
    // peeking
    // ------------------------------------------------------------------

    /// Peek at a success through an `Option` view.
    ///
    /// An `Err` or panic from `consumer` turns the result into a Failure.
    pub fn if_success<C>(self, consumer: C) -> Self
    where
        C: FnOnce(Option<&T>) -> Result<(), Cause>,
    {
        match &self {
            Try::Success(value) => match capture(|| consumer(value.as_ref())) {
                Ok(()) => self,
                Err(cause) => Try::Failure(cause),
            },
            Try::Failure(_) => self,
        }
    }

    /// Peek at the raw, possibly absent success slot.
    ///
    /// An `Err` or panic from `consumer` turns the result into a Failure.
    pub fn if_success_as_nullable<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&Option<T>) -> Result<(), Cause>,
    {
        match &self {
            Try::Success(value) => match capture(|| consumer(value)) {
                Ok(()) => self,
                Err(cause) => Try::Failure(cause),
            },
            Try::Failure(_) => self,
        }
    }

    /// Peek at a present success value; skipped on an empty success.
    ///
    /// An `Err` or panic from `consumer` turns the result into a Failure.
    pub fn if_success_when_present<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&T) -> Result<(), Cause>,
    {
        match &self {
            Try::Success(Some(value)) => match capture(|| consumer(value)) {
                Ok(()) => self,
                Err(cause) => Try::Failure(cause),
            },
            _ => self,
        }
    }

    /// Peek at the captured cause.
    ///
    /// An `Err` or panic from `consumer` replaces the cause.
    pub fn if_failure<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&Cause) -> Result<(), Cause>,
    {
        match &self {
            Try::Failure(cause) => match capture(|| consumer(cause)) {
                Ok(()) => self,
                Err(replacement) => Try::Failure(replacement),
            },
            Try::Success(_) => self,
        }
    }

    /// Side-effecting dual of [`Try::fold`]; exactly one consumer runs.
    ///
    /// Unlike `fold`, an `Err` or panic from either consumer is captured.
    pub fn accept<CF, CS>(self, failure_consumer: CF, success_consumer: CS) -> Self
    where
        CF: FnOnce(&Cause) -> Result<(), Cause>,
        CS: FnOnce(Option<&T>) -> Result<(), Cause>,
    {
        self.if_failure(failure_consumer).if_success(success_consumer)
    }

    // ------------------------------------------------------------------
    // raising accessors
    // ------------------------------------------------------------------

    /// Re-raise the captured cause, if any.
    pub fn if_failure_fail(self) -> Result<Self, Cause> {
        match self {
            Try::Failure(cause) => Err(cause),
            success => Ok(success),
        }
    }

    /// Raise [`TryError::NoSuchElement`] on an empty success.
    pub fn if_absent_fail(self) -> Result<Self, Cause> {
        match self {
            Try::Success(None) => Err(absent_value()),
            other => Ok(other),
        }
    }

    /// Re-raise the captured cause, else return the possibly absent value.
    pub fn value_as_nullable_else_fail(self) -> Result<Option<T>, Cause> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(cause) => Err(cause),
        }
    }

    /// Re-raise the captured cause, else return the value, which must be present.
    pub fn value_as_non_null_else_fail(self) -> Result<T, Cause> {
        match self {
            Try::Success(Some(value)) => Ok(value),
            Try::Success(None) => Err(absent_value()),
            Try::Failure(cause) => Err(cause),
        }
    }

    // ------------------------------------------------------------------
    // mapping
    // ------------------------------------------------------------------

    /// Map a success, presenting the payload as `Option`.
    pub fn map_success<R, M>(self, mapper: M) -> Try<R>
    where
        M: FnOnce(Option<T>) -> Result<R, Cause>,
    {
        match self {
            Try::Success(value) => Try::call(|| mapper(value)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Map a success where both the payload and the result may be absent.
    pub fn map_success_as_nullable<R, M>(self, mapper: M) -> Try<R>
    where
        M: FnOnce(Option<T>) -> Result<Option<R>, Cause>,
    {
        match self {
            Try::Success(value) => Try::call_nullable(|| mapper(value)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Map a present success value; an empty success stays empty and the
    /// mapper is not invoked.
    pub fn map_success_when_present<R, M>(self, mapper: M) -> Try<R>
    where
        M: FnOnce(T) -> Result<R, Cause>,
    {
        match self {
            Try::Success(Some(value)) => Try::call(|| mapper(value)),
            Try::Success(None) => Try::Success(None),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Sequence a fallible step, presenting the payload as `Option`.
    pub fn flat_map_success<R, M>(self, mapper: M) -> Try<R>
    where
        M: FnOnce(Option<T>) -> Try<R>,
    {
        match self {
            Try::Success(value) => flatten(capture_value(|| mapper(value))),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Sequence a step that may not produce a follow-up at all; a `None`
    /// follow-up is an empty success.
    pub fn flat_map_success_as_nullable<R, M>(self, mapper: M) -> Try<R>
    where
        M: FnOnce(Option<T>) -> Option<Try<R>>,
    {
        match self {
            Try::Success(value) => {
                flatten(capture_value(|| mapper(value).unwrap_or(Try::Success(None))))
            }
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Sequence a fallible step on a present value; an empty success stays
    /// empty and the mapper is not invoked.
    pub fn flat_map_success_when_present<R, M>(self, mapper: M) -> Try<R>
    where
        M: FnOnce(T) -> Try<R>,
    {
        match self {
            Try::Success(Some(value)) => flatten(capture_value(|| mapper(value))),
            Try::Success(None) => Try::Success(None),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transform the captured cause. A panic in the mapper replaces the
    /// original cause, which is then lost.
    pub fn map_failure<E, M>(self, mapper: M) -> Self
    where
        E: Into<Cause>,
        M: FnOnce(Cause) -> E,
    {
        match self {
            Try::Failure(cause) => match capture_value(|| mapper(cause).into()) {
                Ok(mapped) => Try::Failure(mapped),
                Err(raised) => Try::Failure(raised),
            },
            success => success,
        }
    }

    /// Recover from a Failure. An `Err` or panic from `recovery` is a new
    /// Failure.
    pub fn map_failure_to_success<M>(self, recovery: M) -> Self
    where
        M: FnOnce(Cause) -> Result<T, Cause>,
    {
        match self {
            Try::Failure(cause) => Try::call(|| recovery(cause)),
            success => success,
        }
    }

    /// Turn an empty success into a [`TryError::NoSuchElement`] Failure.
    pub fn map_empty_to_failure(self) -> Self {
        match self {
            Try::Success(None) => Try::Failure(absent_value()),
            other => other,
        }
    }

    // ------------------------------------------------------------------
    // boundary operations (panics propagate)
    // ------------------------------------------------------------------

    /// Convert to an [`Either`]: Failure to Left, Success to Right.
    ///
    /// The mappers are applied without any guard.
    pub fn map_to_either<L, R, MF, MS>(self, failure_mapper: MF, success_mapper: MS) -> Either<L, R>
    where
        MF: FnOnce(Cause) -> L,
        MS: FnOnce(Option<T>) -> R,
    {
        match self {
            Try::Success(value) => Either::Right(success_mapper(value)),
            Try::Failure(cause) => Either::Left(failure_mapper(cause)),
        }
    }

    /// Collapse into a single value. Exactly one mapper runs, without any
    /// guard.
    pub fn fold<R, MF, MS>(self, failure_mapper: MF, success_mapper: MS) -> R
    where
        MF: FnOnce(Cause) -> R,
        MS: FnOnce(Option<T>) -> R,
    {
        match self {
            Try::Success(value) => success_mapper(value),
            Try::Failure(cause) => failure_mapper(cause),
        }
    }

    // ------------------------------------------------------------------
    // sequencing
    // ------------------------------------------------------------------

    /// On Success, call the next step and adopt its outcome.
    pub fn then_call<R, C>(self, callable: C) -> Try<R>
    where
        C: FnOnce() -> Result<R, Cause>,
    {
        match self {
            Try::Success(_) => Try::call(callable),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// On Success, run the next step and adopt its outcome.
    pub fn then_run<C>(self, runnable: C) -> Try<()>
    where
        C: FnOnce() -> Result<(), Cause>,
    {
        match self {
            Try::Success(_) => Try::<()>::run(runnable),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// On Success, evaluate the next Try and adopt it.
    pub fn then<R, C>(self, next: C) -> Try<R>
    where
        C: FnOnce() -> Try<R>,
    {
        match self {
            Try::Success(_) => flatten(capture_value(next)),
            Try::Failure(cause) => Try::Failure(cause),
        }
    }

    /// On Failure, call the fallback and adopt its outcome.
    pub fn or_call<C>(self, fallback: C) -> Self
    where
        C: FnOnce() -> Result<T, Cause>,
    {
        match self {
            Try::Failure(_) => Try::call(fallback),
            success => success,
        }
    }

    // ------------------------------------------------------------------
    // conversion
    // ------------------------------------------------------------------

    /// Lossless conversion: Failure to Left, Success to Right.
    pub fn into_either(self) -> Either<Cause, Option<T>> {
        match self {
            Try::Success(value) => Either::Right(value),
            Try::Failure(cause) => Either::Left(cause),
        }
    }

    /// Inverse of [`Try::into_either`].
    pub fn from_either(either: Either<Cause, Option<T>>) -> Self {
        either.fold(Try::Failure, Try::Success)
    }

    /// Interpret as a `Result`.
    pub fn into_result(self) -> Result<Option<T>, Cause> {
        self.value_as_nullable_else_fail()
    }

    /// View as a Railway over the nullable payload.
    pub fn into_railway(self) -> Railway<Cause, Option<T>> {
        match self {
            Try::Success(value) => Railway::Success(value),
            Try::Failure(cause) => Railway::Failure(cause),
        }
    }
}

impl Try<()> {
    /// Run `runnable`, capturing an `Err` or a panic. Normal completion is an
    /// empty success.
    pub fn run<C>(runnable: C) -> Self
    where
        C: FnOnce() -> Result<(), Cause>,
    {
        match capture(runnable) {
            Ok(()) => Try::Success(None),
            Err(cause) => Try::Failure(cause),
        }
    }
}

fn flatten<R>(outcome: Result<Try<R>, Cause>) -> Try<R> {
    match outcome {
        Ok(next) => next,
        Err(cause) => Try::Failure(cause),
    }
}

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<Cause>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Try::Success(Some(value)),
            Err(error) => Try::Failure(error.into()),
        }
    }
}

impl<T> From<Either<Cause, Option<T>>> for Try<T> {
    fn from(either: Either<Cause, Option<T>>) -> Self {
        Try::from_either(either)
    }
}

impl<T> From<Try<T>> for Either<Cause, Option<T>> {
    fn from(value: Try<T>) -> Self {
        value.into_either()
    }
}

impl<T> From<Try<T>> for Railway<Cause, Option<T>> {
    fn from(value: Try<T>) -> Self {
        value.into_railway()
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(Some(value)) => f.debug_tuple("Success").field(value).finish(),
            Try::Success(None) => f.write_str("Success(<empty>)"),
            Try::Failure(cause) => f.debug_tuple("Failure").field(cause).finish(),
        }
    }
}
