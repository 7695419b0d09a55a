// Copyright 2025 Cowboy AI, LLC.

//! Scoped capture of caller-supplied logic.
//!
//! Every capturing combinator funnels its callback through [`capture`], so a
//! callback that returns `Err` and a callback that panics end up as the same
//! kind of value: a [`Cause`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::cause::Cause;
use crate::errors::TryError;

/// Run `f`, turning both its `Err` and any panic into a `Cause`.
///
/// A panic whose payload is itself a [`Cause`] (raised with
/// `std::panic::panic_any`) is restored as that same cause.
pub(crate) fn capture<R, F>(f: F) -> Result<R, Cause>
where
    F: FnOnce() -> Result<R, Cause>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(cause_from_panic(payload)),
    }
}

/// Like [`capture`] for callbacks that cannot return an error.
pub(crate) fn capture_value<R, F>(f: F) -> Result<R, Cause>
where
    F: FnOnce() -> R,
{
    capture(|| Ok(f()))
}

fn cause_from_panic(payload: Box<dyn Any + Send>) -> Cause {
    match payload.downcast::<Cause>() {
        Ok(cause) => *cause,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            debug!(%message, "captured panic into failure");
            Cause::new(TryError::Panicked(message))
        }
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
