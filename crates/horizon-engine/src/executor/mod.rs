//! Task executors: scheduling policy for batches of independent work.
//!
//! Numerical code hands the executor a batch of closures and blocks until
//! every one has run. No results travel through the executor; closures own
//! their side effects (typically writes into mutex-guarded slots owned by
//! the caller). That keeps the numerical code identical under serial and
//! parallel scheduling.

mod pool;
mod serial;

pub use pool::ThreadPoolExecutor;
pub use serial::SerialExecutor;

/// A unit of work submitted to an executor.
pub type Task<'a> = Box<dyn FnOnce() + Send + 'a>;

/// Submit-and-wait scheduling over a batch of independent closures.
///
/// `submit_and_wait` is the engine's only suspension point: it returns
/// after **all** tasks have completed, whichever thread ran them. A task
/// that panics is re-raised to the caller once the batch has joined;
/// executors never deadlock on a failing task.
pub trait TaskExecutor: Send + Sync {
    /// Executes every task in the batch and waits for all of them.
    fn submit_and_wait(&self, tasks: Vec<Task<'_>>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn run_counting_batch(executor: &dyn TaskExecutor, count: usize) -> usize {
        let counter = AtomicUsize::new(0);
        let tasks: Vec<Task<'_>> = (0..count)
            .map(|_| {
                Box::new(|| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }) as Task<'_>
            })
            .collect();
        executor.submit_and_wait(tasks);
        counter.load(Ordering::SeqCst)
    }

    #[test]
    fn test_serial_runs_every_task() {
        assert_eq!(run_counting_batch(&SerialExecutor, 64), 64);
    }

    #[test]
    fn test_pool_runs_every_task() {
        let executor = ThreadPoolExecutor::new();
        assert_eq!(run_counting_batch(&executor, 64), 64);
    }

    #[test]
    fn test_pool_is_reusable() {
        let executor = ThreadPoolExecutor::new();
        for _ in 0..10 {
            assert_eq!(run_counting_batch(&executor, 8), 8);
        }
    }

    #[test]
    fn test_serial_preserves_submission_order() {
        let order = Mutex::new(Vec::new());
        let order = &order;
        let tasks: Vec<Task<'_>> = (0..16)
            .map(|i| {
                Box::new(move || {
                    order.lock().push(i);
                }) as Task<'_>
            })
            .collect();
        SerialExecutor.submit_and_wait(tasks);
        assert_eq!(*order.lock(), (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_tasks_write_disjoint_slots() {
        let slots: Vec<Mutex<f64>> = (0..32).map(|_| Mutex::new(0.0)).collect();
        let executor = ThreadPoolExecutor::with_num_threads(4);

        let tasks: Vec<Task<'_>> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                Box::new(move || {
                    *slot.lock() = i as f64;
                }) as Task<'_>
            })
            .collect();
        executor.submit_and_wait(tasks);

        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(*slot.lock(), i as f64);
        }
    }

    #[test]
    #[should_panic(expected = "worker failure")]
    fn test_pool_surfaces_panics() {
        let executor = ThreadPoolExecutor::with_num_threads(2);
        let tasks: Vec<Task<'_>> = vec![
            Box::new(|| {}),
            Box::new(|| panic!("worker failure")),
            Box::new(|| {}),
        ];
        executor.submit_and_wait(tasks);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        SerialExecutor.submit_and_wait(Vec::new());
        ThreadPoolExecutor::new().submit_and_wait(Vec::new());
    }
}
