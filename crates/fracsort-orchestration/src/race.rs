//! First-to-settle race over independently spawned tasks.
//!
//! Every task runs on its own worker and reports through a channel sized to
//! the task count, so no sender ever blocks. The first message received
//! decides the race; later senders find the receiver gone and their results
//! are dropped on the worker that produced them.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use fracsort_core::error::FracError;

/// A unit of work entered into a race.
pub type RaceTask<T> = Box<dyn FnOnce() -> Result<T, FracError> + Send + 'static>;

/// Runs tasks concurrently and keeps whichever settles first.
pub struct RaceExecutor {
    pool: ThreadPool,
}

impl RaceExecutor {
    /// Create an executor with `threads` workers (0 = rayon's default).
    ///
    /// A race with more tasks than workers runs on a wider pool built for
    /// that race, so every task always has a worker of its own.
    pub fn new(threads: usize) -> Result<Self, FracError> {
        Ok(Self {
            pool: build_pool(threads)?,
        })
    }

    /// Number of worker threads in the pool.
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Return the result of the first task to settle, success or failure.
    pub fn race<T: Send + 'static>(&self, tasks: Vec<RaceTask<T>>) -> Result<T, FracError> {
        self.race_indexed(tasks).map(|(_, value)| value)
    }

    /// Like [`race`](Self::race), also returning the winning task's index.
    pub fn race_indexed<T: Send + 'static>(
        &self,
        tasks: Vec<RaceTask<T>>,
    ) -> Result<(usize, T), FracError> {
        self.settle(tasks, None)
    }

    /// Like [`race_indexed`](Self::race_indexed), failing with
    /// `FracError::Timeout` if nothing settles within `timeout`.
    pub fn race_within<T: Send + 'static>(
        &self,
        tasks: Vec<RaceTask<T>>,
        timeout: Duration,
    ) -> Result<(usize, T), FracError> {
        self.settle(tasks, Some(timeout))
    }

    fn settle<T: Send + 'static>(
        &self,
        tasks: Vec<RaceTask<T>>,
        timeout: Option<Duration>,
    ) -> Result<(usize, T), FracError> {
        if tasks.is_empty() {
            return Err(FracError::EmptyRace);
        }

        let wider;
        let pool = if tasks.len() > self.threads() {
            debug!(
                tasks = tasks.len(),
                threads = self.threads(),
                "widening pool for race"
            );
            wider = build_pool(tasks.len())?;
            &wider
        } else {
            &self.pool
        };

        let (tx, rx) = bounded(tasks.len());
        for (index, task) in tasks.into_iter().enumerate() {
            let tx = tx.clone();
            pool.spawn(move || {
                let outcome = catch_panic(format!("task {index}"), task);
                if tx.send((index, outcome)).is_err() {
                    debug!(index, worker = %worker_label(), "late result discarded");
                }
            });
        }
        drop(tx);

        let (index, outcome) = match timeout {
            None => rx.recv().map_err(|_| abandoned())?,
            Some(limit) => rx.recv_timeout(limit).map_err(|e| match e {
                RecvTimeoutError::Timeout => FracError::Timeout(format!("{limit:?}")),
                RecvTimeoutError::Disconnected => abandoned(),
            })?,
        };

        debug!(index, ok = outcome.is_ok(), "race settled");
        outcome.map(|value| (index, value))
    }
}

fn build_pool(threads: usize) -> Result<ThreadPool, FracError> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("race-worker-{i}"))
        .build()
        .map_err(|e| FracError::Config(format!("cannot build worker pool: {e}")))
}

/// Run `task`, turning a panic into a `StrategyFailure` attributed to `label`.
pub(crate) fn catch_panic<T>(
    label: impl Into<String>,
    task: impl FnOnce() -> Result<T, FracError>,
) -> Result<T, FracError> {
    catch_unwind(AssertUnwindSafe(task)).unwrap_or_else(|panic| {
        Err(FracError::strategy_failure(
            label,
            panic_message(panic.as_ref()),
        ))
    })
}

fn abandoned() -> FracError {
    FracError::strategy_failure("race", "every task exited without reporting")
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked".to_string()
    }
}

/// Label of the current thread for diagnostics: its name, or its id.
#[must_use]
pub fn worker_label() -> String {
    let thread = std::thread::current();
    thread
        .name()
        .map_or_else(|| format!("{:?}", thread.id()), str::to_string)
}
