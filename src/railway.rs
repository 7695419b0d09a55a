// Copyright (c) 2025 - Cowboy AI, LLC.

//! Railway: a failure/success disjoint union with short-circuit chaining.
//!
//! # Chaining Law
//!
//! `chain` on a Failure returns the Failure unchanged and never invokes the
//! continuation; on a Success it invokes the continuation and adopts its
//! result. A pipeline of N `chain` steps therefore runs at most the prefix up
//! to and including the first failing step.
//!
//! Failure is a value here, not a raised error. Peeks (`if_success`,
//! `if_failure`) do not capture panics from their consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::either::Either;
use crate::errors::TryError;

/// Either a Success carrying `S` or a Failure carrying `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Railway<F, S> {
    /// The happy track
    Success(S),
    /// The failure track
    Failure(F),
}

impl<F, S> Railway<F, S> {
    /// Construct a Success.
    pub fn success(value: S) -> Self {
        Railway::Success(value)
    }

    /// Construct a Failure.
    pub fn failure(value: F) -> Self {
        Railway::Failure(value)
    }

    /// Whether this is on the Success track.
    pub fn is_success(&self) -> bool {
        matches!(self, Railway::Success(_))
    }

    /// Whether this is on the Failure track.
    pub fn is_failure(&self) -> bool {
        matches!(self, Railway::Failure(_))
    }

    /// The success value, if any.
    pub fn get_success(&self) -> Option<&S> {
        match self {
            Railway::Success(s) => Some(s),
            Railway::Failure(_) => None,
        }
    }

    /// The failure value, if any.
    pub fn get_failure(&self) -> Option<&F> {
        match self {
            Railway::Failure(f) => Some(f),
            Railway::Success(_) => None,
        }
    }

    /// Take the success value; [`TryError::NoSuchElement`] on a Failure.
    pub fn get_success_else_fail(self) -> Result<S, TryError> {
        match self {
            Railway::Success(s) => Ok(s),
            Railway::Failure(_) => Err(TryError::no_such_element(
                "railway is on the failure track",
            )),
        }
    }

    /// Take the success value, converting a failure payload into `E`.
    pub fn get_success_else_fail_with<E, T>(self, to_error: T) -> Result<S, E>
    where
        T: FnOnce(F) -> E,
    {
        match self {
            Railway::Success(s) => Ok(s),
            Railway::Failure(f) => Err(to_error(f)),
        }
    }

    /// Peek at a success value. Returns `self` unchanged.
    pub fn if_success<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&S),
    {
        if let Railway::Success(s) = &self {
            consumer(s);
        }
        self
    }

    /// Peek at a failure value. Returns `self` unchanged.
    pub fn if_failure<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&F),
    {
        if let Railway::Failure(f) = &self {
            consumer(f);
        }
        self
    }

    /// Transform the success payload; a Failure passes through.
    pub fn map_success<T, M>(self, mapper: M) -> Railway<F, T>
    where
        M: FnOnce(S) -> T,
    {
        match self {
            Railway::Success(s) => Railway::Success(mapper(s)),
            Railway::Failure(f) => Railway::Failure(f),
        }
    }

    /// Transform the failure payload; a Success passes through.
    pub fn map_failure<G, M>(self, mapper: M) -> Railway<G, S>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Railway::Success(s) => Railway::Success(s),
            Railway::Failure(f) => Railway::Failure(mapper(f)),
        }
    }

    /// Collapse into a single value. Exactly one mapper runs.
    pub fn fold<T, MF, MS>(self, failure_mapper: MF, success_mapper: MS) -> T
    where
        MF: FnOnce(F) -> T,
        MS: FnOnce(S) -> T,
    {
        match self {
            Railway::Success(s) => success_mapper(s),
            Railway::Failure(f) => failure_mapper(f),
        }
    }

    /// Sequence a step that may itself fail.
    ///
    /// On Success the continuation's Railway is adopted; on Failure the
    /// continuation is skipped and the failure flows on unchanged.
    pub fn chain<T, C>(self, continuation: C) -> Railway<F, T>
    where
        C: FnOnce(S) -> Railway<F, T>,
    {
        match self {
            Railway::Success(s) => continuation(s),
            Railway::Failure(f) => Railway::Failure(f),
        }
    }

    /// Explicitly move a Failure back onto the Success track.
    pub fn recover<M>(self, recovery: M) -> Self
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Railway::Success(s) => Railway::Success(s),
            Railway::Failure(f) => Railway::Success(recovery(f)),
        }
    }

    /// Interpret as a `Result`.
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Railway::Success(s) => Ok(s),
            Railway::Failure(f) => Err(f),
        }
    }

    /// Failure as Left, Success as Right.
    pub fn into_either(self) -> Either<F, S> {
        match self {
            Railway::Success(s) => Either::Right(s),
            Railway::Failure(f) => Either::Left(f),
        }
    }
}

impl<F, S> From<Result<S, F>> for Railway<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(s) => Railway::Success(s),
            Err(f) => Railway::Failure(f),
        }
    }
}

impl<F, S> From<Either<F, S>> for Railway<F, S> {
    fn from(either: Either<F, S>) -> Self {
        either.fold(Railway::Failure, Railway::Success)
    }
}

/// Gives any type that wraps a [`Railway`] the Railway surface by delegation.
pub trait HasRailway<F, S>: Sized {
    /// Borrow the wrapped Railway
    fn railway(&self) -> &Railway<F, S>;

    /// Unwrap into the wrapped Railway
    fn into_railway(self) -> Railway<F, S>;

    /// See [`Railway::is_success`]
    fn is_success(&self) -> bool {
        self.railway().is_success()
    }

    /// See [`Railway::is_failure`]
    fn is_failure(&self) -> bool {
        self.railway().is_failure()
    }

    /// See [`Railway::get_success`]
    fn get_success<'a>(&'a self) -> Option<&'a S>
    where
        F: 'a,
    {
        self.railway().get_success()
    }

    /// See [`Railway::get_failure`]
    fn get_failure<'a>(&'a self) -> Option<&'a F>
    where
        S: 'a,
    {
        self.railway().get_failure()
    }

    /// See [`Railway::get_success_else_fail`]
    fn get_success_else_fail(self) -> Result<S, TryError> {
        self.into_railway().get_success_else_fail()
    }

    /// See [`Railway::get_success_else_fail_with`]
    fn get_success_else_fail_with<E, T>(self, to_error: T) -> Result<S, E>
    where
        T: FnOnce(F) -> E,
    {
        self.into_railway().get_success_else_fail_with(to_error)
    }

    /// See [`Railway::if_success`]
    fn if_success<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&S),
    {
        if let Some(s) = self.railway().get_success() {
            consumer(s);
        }
        self
    }

    /// See [`Railway::if_failure`]
    fn if_failure<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&F),
    {
        if let Some(f) = self.railway().get_failure() {
            consumer(f);
        }
        self
    }

    /// See [`Railway::map_success`]
    fn map_success<T, M>(self, mapper: M) -> Railway<F, T>
    where
        M: FnOnce(S) -> T,
    {
        self.into_railway().map_success(mapper)
    }

    /// See [`Railway::map_failure`]
    fn map_failure<G, M>(self, mapper: M) -> Railway<G, S>
    where
        M: FnOnce(F) -> G,
    {
        self.into_railway().map_failure(mapper)
    }

    /// See [`Railway::fold`]
    fn fold<T, MF, MS>(self, failure_mapper: MF, success_mapper: MS) -> T
    where
        MF: FnOnce(F) -> T,
        MS: FnOnce(S) -> T,
    {
        self.into_railway().fold(failure_mapper, success_mapper)
    }

    /// See [`Railway::chain`]
    fn chain<T, C>(self, continuation: C) -> Railway<F, T>
    where
        C: FnOnce(S) -> Railway<F, T>,
    {
        self.into_railway().chain(continuation)
    }
}

impl<F, S> HasRailway<F, S> for Railway<F, S> {
    fn railway(&self) -> &Railway<F, S> {
        self
    }

    fn into_railway(self) -> Railway<F, S> {
        self
    }
}
