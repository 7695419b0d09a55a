// Copyright 2025 Cowboy AI, LLC.

//! The captured error carried by a failed [`crate::Try`]

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A captured error.
///
/// Cloning a `Cause` shares the same underlying error, so a cause that is
/// re-raised, cloned or carried through a pipeline stays the *same* cause.
/// Equality is identity: two causes are equal only if they share the error.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into a `Cause`,
/// which lets `?` be used inside the closures handed to capturing
/// combinators.
#[derive(Clone)]
pub struct Cause {
    inner: Arc<anyhow::Error>,
}

impl Cause {
    /// Wrap an error
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::new(error))
    }

    /// Create a cause carrying only a message
    pub fn msg(message: impl fmt::Display + fmt::Debug + Send + Sync + 'static) -> Self {
        Self::from_anyhow(anyhow::Error::msg(message))
    }

    /// Wrap an `anyhow::Error`
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Borrow the underlying error
    pub fn error(&self) -> &anyhow::Error {
        &self.inner
    }

    /// Attempt to view the outermost error as a concrete type
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Check whether the outermost error is of type `E`
    pub fn is<E>(&self) -> bool
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.inner.is::<E>()
    }

    /// Check whether both handles share the same captured error
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The outermost error message
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Convert into an `anyhow::Error` whose chain starts at this cause
    pub fn into_anyhow(self) -> anyhow::Error {
        anyhow::Error::new(Shared(self))
    }

    /// Wrap this cause with additional context, producing a new cause
    pub fn context<C>(&self, context: C) -> Cause
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        Cause::from_anyhow(self.clone().into_anyhow().context(context))
    }
}

impl<E> From<E> for Cause
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Cause::new(error)
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cause").field(&format_args!("{:#}", self.inner)).finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

/// Serialized as the full message chain; deserialized as a message-only cause.
impl Serialize for Cause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:#}", self.inner))
    }
}

impl<'de> Deserialize<'de> for Cause {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let message = String::deserialize(deserializer)?;
        Ok(Cause::msg(message))
    }
}

/// Lets an existing cause sit in the source chain of a new one
#[derive(Debug)]
struct Shared(Cause);

impl fmt::Display for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Shared {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.inner.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TryError;

    #[test]
    fn test_clone_preserves_identity() {
        let cause = Cause::new(TryError::Cancelled);
        let cloned = cause.clone();
        assert!(cause.ptr_eq(&cloned));
        assert_eq!(cause, cloned);
    }

    #[test]
    fn test_equal_messages_are_distinct_causes() {
        let a = Cause::msg("boom");
        let b = Cause::msg("boom");
        assert_ne!(a, b);
        assert_eq!(a.message(), b.message());
    }

    #[test]
    fn test_downcast_keeps_original_type() {
        let cause: Cause = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(cause.is::<std::io::Error>());
        let io = cause.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert!(!cause.is::<TryError>());
    }

    #[test]
    fn test_question_mark_converts() {
        fn parse(input: &str) -> Result<i32, Cause> {
            Ok(input.parse::<i32>()?)
        }
        assert_eq!(parse("7").unwrap(), 7);
        let cause = parse("seven").unwrap_err();
        assert!(cause.is::<std::num::ParseIntError>());
    }

    #[test]
    fn test_context_wraps_message() {
        let cause = Cause::msg("disk full");
        let wrapped = cause.context("saving snapshot");
        assert_eq!(wrapped.message(), "saving snapshot");
        assert_eq!(format!("{:#}", wrapped.error()), "saving snapshot: disk full");
        assert!(!wrapped.ptr_eq(&cause));
    }

    #[test]
    fn test_into_anyhow_keeps_message() {
        let error = Cause::msg("inner failure").into_anyhow();
        assert_eq!(error.to_string(), "inner failure");
    }

    #[test]
    fn test_serde_message_chain() {
        let cause = Cause::new(TryError::no_such_element("value"));
        let json = serde_json::to_string(&cause).unwrap();
        assert_eq!(json, "\"No such element: value\"");

        let back: Cause = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message(), "No such element: value");
    }
}
