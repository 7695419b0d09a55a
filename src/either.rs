// Copyright (c) 2025 - Cowboy AI, LLC.

//! A standard Either ADT: Left(L) or Right(R).
//!
//! Either carries no failure semantics of its own. By convention `Right` holds
//! the expected value and `Left` the alternate one, but nothing here enforces
//! it. Either never raises on its own account; a panic in a caller-supplied
//! function propagates unchanged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Disjoint union of two alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value")]
pub enum Either<L, R> {
    /// Left branch
    Left(L),
    /// Right branch
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Whether this is the Left branch.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Whether this is the Right branch.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Get a reference to the Left value if present.
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Get a reference to the Right value if present.
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Right(r) => Some(r),
            Either::Left(_) => None,
        }
    }

    /// Take the Left value, `None` on the Right branch.
    pub fn left_if_any(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Take the Right value, `None` on the Left branch.
    pub fn right_if_any(self) -> Option<R> {
        match self {
            Either::Right(r) => Some(r),
            Either::Left(_) => None,
        }
    }

    /// Borrow both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Exchange the branches.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Map over the Left value; a Right passes through untouched.
    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Map over the Right value; a Left passes through untouched.
    pub fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Map whichever side is populated. Exactly one mapper runs.
    pub fn map<L2, R2, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(left_mapper(l)),
            Either::Right(r) => Either::Right(right_mapper(r)),
        }
    }

    /// Collapse into a single value. Exactly one mapper runs.
    pub fn fold<T, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_mapper(l),
            Either::Right(r) => right_mapper(r),
        }
    }

    /// Collapse with a two-argument function receiving `(left, right)`;
    /// exactly one argument is `Some`.
    pub fn fold_with<T, F>(self, bi_mapper: F) -> T
    where
        F: FnOnce(Option<L>, Option<R>) -> T,
    {
        match self {
            Either::Left(l) => bi_mapper(Some(l), None),
            Either::Right(r) => bi_mapper(None, Some(r)),
        }
    }

    /// Side-effecting dual of [`Either::fold`]. Exactly one consumer runs.
    pub fn accept<CL, CR>(&self, left_consumer: CL, right_consumer: CR)
    where
        CL: FnOnce(&L),
        CR: FnOnce(&R),
    {
        match self {
            Either::Left(l) => left_consumer(l),
            Either::Right(r) => right_consumer(r),
        }
    }

    /// Interpret Right as `Ok` and Left as `Err`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

/// Gives any type that wraps an [`Either`] the Either surface by delegation.
///
/// Implementors provide the two accessors; everything else forwards.
pub trait HasEither<L, R>: Sized {
    /// Borrow the wrapped Either
    fn either(&self) -> &Either<L, R>;

    /// Unwrap into the wrapped Either
    fn into_either(self) -> Either<L, R>;

    /// See [`Either::is_left`]
    fn is_left(&self) -> bool {
        self.either().is_left()
    }

    /// See [`Either::is_right`]
    fn is_right(&self) -> bool {
        self.either().is_right()
    }

    /// See [`Either::left`]
    fn left<'a>(&'a self) -> Option<&'a L>
    where
        R: 'a,
    {
        self.either().left()
    }

    /// See [`Either::right`]
    fn right<'a>(&'a self) -> Option<&'a R>
    where
        L: 'a,
    {
        self.either().right()
    }

    /// See [`Either::left_if_any`]
    fn left_if_any(self) -> Option<L> {
        self.into_either().left_if_any()
    }

    /// See [`Either::right_if_any`]
    fn right_if_any(self) -> Option<R> {
        self.into_either().right_if_any()
    }

    /// See [`Either::map_left`]
    fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.into_either().map_left(f)
    }

    /// See [`Either::map_right`]
    fn map_right<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.into_either().map_right(f)
    }

    /// See [`Either::map`]
    fn map<L2, R2, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        self.into_either().map(left_mapper, right_mapper)
    }

    /// See [`Either::fold`]
    fn fold<T, FL, FR>(self, left_mapper: FL, right_mapper: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        self.into_either().fold(left_mapper, right_mapper)
    }

    /// See [`Either::fold_with`]
    fn fold_with<T, F>(self, bi_mapper: F) -> T
    where
        F: FnOnce(Option<L>, Option<R>) -> T,
    {
        self.into_either().fold_with(bi_mapper)
    }

    /// See [`Either::accept`]
    fn accept<CL, CR>(&self, left_consumer: CL, right_consumer: CR)
    where
        CL: FnOnce(&L),
        CR: FnOnce(&R),
    {
        self.either().accept(left_consumer, right_consumer)
    }
}

impl<L, R> HasEither<L, R> for Either<L, R> {
    fn either(&self) -> &Either<L, R> {
        self
    }

    fn into_either(self) -> Either<L, R> {
        self
    }
}
