// Copyright 2025 Cowboy AI, LLC.

//! Executors that accept work for [`crate::TryFuture`]
//!
//! An executor only schedules; it never reports outcomes. Outcomes travel
//! back through the future that [`crate::TryFuture::submit`] builds around the
//! job. Lifecycle of the runtime behind an executor stays with the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::errors::{TryError, TryResult};

/// A unit of work handed to an [`Executor`].
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Something that can schedule a [`Job`].
pub trait Executor {
    /// Accept `job` for execution, or refuse it synchronously.
    fn execute(&self, job: Job) -> TryResult<()>;

    /// Runtime used to wait on work scheduled here.
    fn runtime(&self) -> Handle;
}

/// Configuration for a [`RuntimeExecutor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Reject new jobs while this many are still running (`None` = unbounded)
    pub max_in_flight: Option<usize>,
    /// Name reported in log events
    pub label: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_in_flight: None,
            label: "cim-railway".to_string(),
        }
    }
}

/// Runs jobs on the blocking pool of a tokio runtime.
pub struct RuntimeExecutor {
    runtime: Handle,
    config: ExecutorConfig,
    permits: Option<Arc<Semaphore>>,
    shut_down: AtomicBool,
}

impl RuntimeExecutor {
    /// Create an unbounded executor on `runtime`
    pub fn new(runtime: Handle) -> Self {
        Self::with_config(runtime, ExecutorConfig::default())
    }

    /// Create an executor on `runtime` with explicit configuration
    pub fn with_config(runtime: Handle, config: ExecutorConfig) -> Self {
        let permits = config.max_in_flight.map(|max| Arc::new(Semaphore::new(max)));
        Self {
            runtime,
            config,
            permits,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Create an unbounded executor on the runtime of the calling context
    pub fn current() -> TryResult<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|err| TryError::Rejected(err.to_string()))
    }

    /// The active configuration
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Refuse all further jobs. Jobs already accepted keep running.
    pub fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::SeqCst) {
            info!(executor = %self.config.label, "executor shut down");
        }
    }

    /// Whether [`RuntimeExecutor::shutdown`] has been called
    pub fn is_shutdown(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl Executor for RuntimeExecutor {
    fn execute(&self, job: Job) -> TryResult<()> {
        if self.is_shutdown() {
            warn!(executor = %self.config.label, "rejected job: executor is shut down");
            return Err(TryError::Rejected("executor is shut down".to_string()));
        }

        let permit = match &self.permits {
            Some(permits) => match Arc::clone(permits).try_acquire_owned() {
                Ok(permit) => Some(permit),
                Err(_) => {
                    let max = self.config.max_in_flight.unwrap_or_default();
                    warn!(executor = %self.config.label, max, "rejected job: executor saturated");
                    return Err(TryError::Rejected(format!("{max} jobs already in flight")));
                }
            },
            None => None,
        };

        let started = Arc::new(AtomicBool::new(false));
        let task = {
            let started = Arc::clone(&started);
            self.runtime.spawn_blocking(move || {
                started.store(true, Ordering::SeqCst);
                let _permit = permit;
                job();
            })
        };

        // a runtime that is shutting down completes the task without running it
        if task.is_finished() && !started.load(Ordering::SeqCst) {
            warn!(executor = %self.config.label, "rejected job: runtime is shut down");
            return Err(TryError::Rejected("runtime is shut down".to_string()));
        }
        Ok(())
    }

    fn runtime(&self) -> Handle {
        self.runtime.clone()
    }
}
