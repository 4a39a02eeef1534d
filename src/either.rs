// konsa - Right-biased unions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `Either` type represents values with two possibilities: a value of
//! type `Either<L, R>` is either `Left(l)` or `Right(r)`.
//!
//! `Either` is commonly used to represent a value which is either correct
//! or an error; by convention `Left` holds the error and `Right` the
//! correct value (mnemonic: "right" also means "correct"). The type is
//! right-biased: [`Either::map`] and [`Either::and_then`] act on `Right`
//! and pass `Left` through unchanged, so a pipeline of fallible steps
//! aborts on the first `Left` it produces.

use std::fmt;

use crate::maybe::Maybe;

/// A union of two alternatives, biased towards `Right`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The "other" alternative; short-circuits mapping and chaining
    Left(L),
    /// The preferred alternative; mapping and chaining act on this
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a `Left` value.
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value.
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Collapse both alternatives to a single value. Exactly one of the
    /// two functions is invoked, decided by the active variant.
    pub fn fold<U, F, G>(self, on_left: F, on_right: G) -> U
    where
        F: FnOnce(L) -> U,
        G: FnOnce(R) -> U,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Map the `Right` payload; `Left` passes through unchanged.
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Exchange the roles of the two alternatives.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Chain a computation that can itself produce either alternative.
    /// A `Left` short-circuits: it is returned unchanged and `f` is never
    /// invoked.
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Convert a `Right` to `Just` and a `Left` to `Nothing`.
    pub fn to_maybe(self) -> Maybe<R> {
        self.fold(|_| Maybe::nothing(), Maybe::just)
    }

    /// The `Right` payload, if this is a `Right`.
    pub fn get(self) -> Option<R> {
        match self {
            Either::Right(r) => Some(r),
            Either::Left(_) => None,
        }
    }

    /// true when this value is a `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// true when this value is a `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }
}

/// If the condition holds, produce a `Right` from `on_true`, otherwise a
/// `Left` from `on_false`. Exactly one of the two producers is evaluated.
pub fn either<L, R, F, G>(cond: bool, on_true: F, on_false: G) -> Either<L, R>
where
    F: FnOnce() -> R,
    G: FnOnce() -> L,
{
    if cond {
        Either::Right(on_true())
    } else {
        Either::Left(on_false())
    }
}

/// Free-function form of [`Either::fold`], for call sites where the
/// postfix method reads awkwardly.
pub fn elim<L, R, T, F, G>(on_left: F, on_right: G, value: Either<L, R>) -> T
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> T,
{
    value.fold(on_left, on_right)
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
