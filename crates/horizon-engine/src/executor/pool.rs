//! Worker-pool executor.

use rayon::{ThreadPool, ThreadPoolBuilder};

use super::{Task, TaskExecutor};

/// Executor backed by a dedicated worker pool.
///
/// The pool is built once and reused across every `submit_and_wait` call.
/// Each batch is run under a scope that joins all spawned tasks before
/// returning; a panicking task is re-raised to the caller after the rest
/// of the batch has finished, so a failure can never leave the caller
/// blocked.
///
/// Nested submission is safe: a task may itself call `submit_and_wait` on
/// the same executor, and the waiting worker steals other tasks instead
/// of idling.
pub struct ThreadPoolExecutor {
    pool: ThreadPool,
}

impl ThreadPoolExecutor {
    /// Creates a pool sized to the hardware's available parallelism.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a pool with a fixed number of workers.
    #[must_use]
    pub fn with_num_threads(num_threads: usize) -> Self {
        Self::build(Some(num_threads))
    }

    /// Returns the number of workers in the pool.
    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn build(num_threads: Option<usize>) -> Self {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("horizon-worker-{i}"));
        if let Some(n) = num_threads {
            builder = builder.num_threads(n);
        }
        let pool = builder
            .build()
            .expect("worker pool construction only fails on unsupported platforms");
        Self { pool }
    }
}

impl Default for ThreadPoolExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskExecutor for ThreadPoolExecutor {
    fn submit_and_wait(&self, tasks: Vec<Task<'_>>) {
        if tasks.is_empty() {
            return;
        }

        self.pool.scope(|scope| {
            for task in tasks {
                scope.spawn(move |_| task());
            }
        });
    }
}
