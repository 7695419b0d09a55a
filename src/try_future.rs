// Copyright 2025 Cowboy AI, LLC.

//! Blocking accessors over an asynchronous computation that report through
//! [`Try`] instead of raising.
//!
//! A `TryFuture` owns nothing but a shared handle to work that runs on a
//! tokio runtime. Waiting with a timeout abandons the wait, not the work; to
//! cancel, keep the task's `AbortHandle` before wrapping it.
//!
//! The accessors park the calling thread against a wall-clock deadline, so a
//! bounded wait stays bounded on any runtime flavor, including a
//! current-thread runtime that nobody is driving. Tasks spawned on such a
//! runtime only make progress while its owner drives it; blocking-pool jobs
//! from [`crate::RuntimeExecutor`] run regardless.
//!
//! The accessors must not be called from inside an async context; doing so
//! is reported as a Failure.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread::{self, Thread};
use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt, Shared};
use futures::task::{waker_ref, ArcWake};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::capture::capture_value;
use crate::cause::Cause;
use crate::errors::{TryError, TryResult};
use crate::executor::Executor;
use crate::try_value::Try;

/// A pending computation whose blocking accessors return [`Try`].
#[derive(Clone)]
pub struct TryFuture<T> {
    outcome: Shared<BoxFuture<'static, Try<T>>>,
    runtime: Handle,
}

impl<T> TryFuture<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Wrap a tokio task. A panic or cancellation of the task is reported as
    /// a Failure by the accessors.
    pub fn from_handle(runtime: Handle, handle: JoinHandle<T>) -> Self {
        Self::wrap(runtime, async move {
            match handle.await {
                Ok(value) => Try::success(value),
                Err(err) => Try::failure(TryError::from(err)),
            }
        })
    }

    /// Spawn `completion` onto `runtime` and wrap it.
    ///
    /// The future runs as its own task, so it keeps progressing after a
    /// timed-out wait.
    pub fn from_future<F>(runtime: Handle, completion: F) -> Self
    where
        F: Future<Output = Try<T>> + Send + 'static,
    {
        let task = runtime.spawn(completion);
        Self::wrap(runtime, async move {
            match task.await {
                Ok(outcome) => outcome,
                Err(err) => Try::failure(TryError::from(err)),
            }
        })
    }

    /// Submit `callable` to `executor` right away.
    ///
    /// A rejection is returned here, synchronously; it is never folded into
    /// the outcome.
    pub fn submit<C, E>(callable: C, executor: &E) -> TryResult<Self>
    where
        C: FnOnce() -> Result<T, Cause> + Send + 'static,
        E: Executor + ?Sized,
    {
        let runtime = executor.runtime();
        let (outcome_tx, outcome_rx) = oneshot::channel();
        executor.execute(Box::new(move || {
            // the receiver may be gone; the outcome is then unobserved
            let _ = outcome_tx.send(Try::call(callable));
        }))?;

        Ok(Self::wrap(runtime, async move {
            match outcome_rx.await {
                Ok(outcome) => outcome,
                Err(err) => Try::failure(TryError::from(err)),
            }
        }))
    }

    fn wrap<F>(runtime: Handle, outcome: F) -> Self
    where
        F: Future<Output = Try<T>> + Send + 'static,
    {
        Self {
            outcome: outcome.boxed().shared(),
            runtime,
        }
    }

    /// Block until the computation completes.
    pub fn try_get(&self) -> Try<T> {
        match self.wait(None) {
            Ok(Some(outcome)) => outcome,
            // no deadline, so the wait only ends with an outcome
            Ok(None) => Try::failure(TryError::Abandoned),
            Err(cause) => Try::Failure(cause),
        }
    }

    /// Block for at most `timeout`. Expiry is a [`TryError::Timeout`]
    /// Failure; the computation keeps running.
    pub fn try_get_timeout(&self, timeout: Duration) -> Try<T> {
        match self.wait(Some(Instant::now() + timeout)) {
            Ok(Some(outcome)) => outcome,
            Ok(None) => {
                debug!(?timeout, "wait on computation timed out");
                Try::failure(TryError::Timeout { after: timeout })
            }
            Err(cause) => Try::Failure(cause),
        }
    }

    fn wait(&self, deadline: Option<Instant>) -> Result<Option<Try<T>>, Cause> {
        let outcome = self.outcome.clone();
        capture_value(|| {
            // panics when the caller is itself running inside the runtime
            self.runtime.block_on(async {});
            park_until(outcome, deadline)
        })
    }

    /// The runtime this future's work runs on
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }
}

impl<T> fmt::Debug for TryFuture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFuture").finish_non_exhaustive()
    }
}

struct ParkedThread(Thread);

impl ArcWake for ParkedThread {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        arc_self.0.unpark();
    }
}

/// Poll `future` on the calling thread, parking between wakeups, until it
/// completes or `deadline` passes.
fn park_until<F>(mut future: F, deadline: Option<Instant>) -> Option<F::Output>
where
    F: Future + Unpin,
{
    let parked = Arc::new(ParkedThread(thread::current()));
    let waker = waker_ref(&parked);
    let mut cx = Context::from_waker(&waker);

    loop {
        if let Poll::Ready(output) = future.poll_unpin(&mut cx) {
            return Some(output);
        }
        match deadline {
            None => thread::park(),
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return None;
                }
                thread::park_timeout(deadline - now);
            }
        }
    }
}
