//! Fork-join reduction over contiguous shards
//!
//! A reduction plans its partitions, spawns one worker per partition inside a
//! thread scope, joins every worker, and then hands the shard results to the
//! global aggregation in partition order.
//!
//! Each worker writes exactly one pre-sized result slot that it borrows
//! exclusively, so the slots need no lock. Slots are cache-padded because
//! neighbouring slots are written from different cores.

use crate::error::{Error, Result};
use crate::interrupt::InterruptSignal;
use crate::partition::partition;
use crate::worker::{placement, spawn_shard, WorkerConfig};
use crossbeam::utils::CachePadded;
use std::convert::Infallible;
use std::fmt::Display;
use std::thread;

/// Reduction configuration
#[derive(Debug, Clone, Default)]
pub struct ReduceConfig {
    /// Configuration applied to every worker thread
    pub worker_config: WorkerConfig,

    /// Signal checked before each spawn and before each shard starts
    pub interrupt: Option<InterruptSignal>,
}

impl ReduceConfig {
    /// Create a new reduction configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker configuration template
    pub fn with_worker_config(mut self, config: WorkerConfig) -> Self {
        self.worker_config = config;
        self
    }

    /// Observe `signal` for interruption
    pub fn with_interrupt(mut self, signal: InterruptSignal) -> Self {
        self.interrupt = Some(signal);
        self
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(InterruptSignal::is_interrupted)
    }
}

/// Runs reductions with a fixed configuration
///
/// Holds no threads between calls; every reduction creates and joins its own
/// workers.
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    config: ReduceConfig,
}

impl Reducer {
    /// Create a reducer with the given configuration
    pub fn new(config: ReduceConfig) -> Self {
        Self { config }
    }

    /// Configuration used by this reducer
    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// Reduce `values` with an infallible shard function
    ///
    /// `shard_fn` runs once per partition on its own thread; `global_fn`
    /// receives the shard results in partition order.
    pub fn reduce<'a, T, R, O, S, G>(
        &self,
        values: &'a [T],
        workers: usize,
        shard_fn: S,
        global_fn: G,
    ) -> Result<O>
    where
        T: Sync,
        R: Send,
        S: Fn(&'a [T]) -> R + Sync,
        G: FnOnce(Vec<R>) -> O,
    {
        self.try_reduce(
            values,
            workers,
            |shard| Ok::<R, Infallible>(shard_fn(shard)),
            |results| Ok(global_fn(results)),
        )
    }

    /// Reduce `values` with a fallible shard function
    ///
    /// A shard returning `Err` or panicking fails the whole call with
    /// [`Error::WorkerFailure`] for the lowest failing partition index. All
    /// other workers still run to completion first.
    ///
    /// Once the configured interrupt fires, no further workers are spawned
    /// and spawned workers that have not started skip their shard. Shards
    /// already running finish, then the call fails with [`Error::Interrupted`].
    pub fn try_reduce<'a, T, R, E, O, S, G>(
        &self,
        values: &'a [T],
        workers: usize,
        shard_fn: S,
        global_fn: G,
    ) -> Result<O>
    where
        T: Sync,
        R: Send,
        E: Display + Send,
        S: Fn(&'a [T]) -> std::result::Result<R, E> + Sync,
        G: FnOnce(Vec<R>) -> Result<O>,
    {
        let plan = partition(values.len(), workers)?;
        let effective = plan.effective_workers();

        if self.config.is_interrupted() {
            tracing::warn!("reduction interrupted before spawning workers");
            return Err(Error::Interrupted);
        }

        tracing::debug!(
            len = values.len(),
            requested = workers,
            workers = effective,
            "starting reduction"
        );

        let cores = placement(&self.config.worker_config, effective);
        let mut slots: Vec<CachePadded<Option<std::result::Result<R, E>>>> =
            std::iter::repeat_with(|| CachePadded::new(None))
                .take(effective)
                .collect();
        let mut panics: Vec<Option<Error>> = vec![None; effective];
        let interrupt = self.config.interrupt.as_ref();
        let interrupted = || interrupt.is_some_and(InterruptSignal::is_interrupted);
        let shard_fn = &shard_fn;

        thread::scope(|s| -> Result<()> {
            let mut handles = Vec::with_capacity(effective);
            let mut spawn_error = None;

            for ((part, slot), core) in plan.iter().zip(slots.iter_mut()).zip(cores) {
                if interrupted() {
                    tracing::trace!(shard = part.index, "interrupted, not spawning remaining shards");
                    break;
                }

                let shard = &values[part.range()];
                let index = part.index;
                let spawned = spawn_shard(s, &self.config.worker_config, index, core, move || {
                    if interrupted() {
                        tracing::trace!(shard = index, "interrupted, skipping shard");
                        return;
                    }
                    **slot = Some(shard_fn(shard));
                });

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(err) => {
                        spawn_error = Some(err);
                        break;
                    }
                }
            }

            // Join barrier: every spawned worker is awaited exactly once
            for (index, handle) in handles.into_iter().enumerate() {
                if let Err(payload) = handle.join() {
                    panics[index] = Some(Error::worker_panicked(index, payload.as_ref()));
                }
            }

            match spawn_error {
                Some(err) => Err(err),
                None => Ok(()),
            }
        })?;

        if interrupted() {
            tracing::warn!(workers = effective, "reduction interrupted, discarding shard results");
            return Err(Error::Interrupted);
        }

        let mut results = Vec::with_capacity(effective);
        for (index, slot) in slots.into_iter().enumerate() {
            match slot.into_inner() {
                Some(Ok(result)) => results.push(result),
                Some(Err(err)) => {
                    let message = err.to_string();
                    tracing::warn!(shard = index, %message, "shard failed");
                    return Err(Error::WorkerFailure { shard: index, message });
                }
                None => {
                    let err = panics[index].take().unwrap_or_else(|| Error::WorkerFailure {
                        shard: index,
                        message: "worker produced no result".to_string(),
                    });
                    tracing::warn!(shard = index, error = %err, "shard failed");
                    return Err(err);
                }
            }
        }

        tracing::debug!(workers = effective, "all shards joined");

        global_fn(results)
    }
}

/// Reduce `values` with the default configuration
///
/// See [`Reducer::reduce`].
pub fn reduce<'a, T, R, O, S, G>(
    values: &'a [T],
    workers: usize,
    shard_fn: S,
    global_fn: G,
) -> Result<O>
where
    T: Sync,
    R: Send,
    S: Fn(&'a [T]) -> R + Sync,
    G: FnOnce(Vec<R>) -> O,
{
    Reducer::default().reduce(values, workers, shard_fn, global_fn)
}

/// Reduce `values` with a fallible shard function and the default configuration
///
/// See [`Reducer::try_reduce`].
pub fn try_reduce<'a, T, R, E, O, S, G>(
    values: &'a [T],
    workers: usize,
    shard_fn: S,
    global_fn: G,
) -> Result<O>
where
    T: Sync,
    R: Send,
    E: Display + Send,
    S: Fn(&'a [T]) -> std::result::Result<R, E> + Sync,
    G: FnOnce(Vec<R>) -> Result<O>,
{
    Reducer::default().try_reduce(values, workers, shard_fn, global_fn)
}
