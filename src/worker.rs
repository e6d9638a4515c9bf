//! Shard worker threads
//!
//! Each reduction spawns one scoped thread per partition. Workers are never
//! pooled: they are created inside the reduction's thread scope and are all
//! joined before the reduction returns.

use crate::error::Result;
use core_affinity::CoreId;
use std::thread::{self, Scope, ScopedJoinHandle};

/// Worker thread configuration
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Prefix for worker thread names; worker `i` is named `{prefix}-{i}`
    pub thread_name: String,

    /// Stack size for worker threads (None = platform default)
    pub stack_size: Option<usize>,

    /// Pin worker `i` to core `i % cores`
    pub pin_to_cores: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            thread_name: "shard-worker".to_string(),
            stack_size: None,
            pin_to_cores: false,
        }
    }
}

impl WorkerConfig {
    /// Create a new worker configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thread name prefix
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Set stack size
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = Some(size);
        self
    }

    /// Enable CPU affinity pinning
    pub fn with_pin_to_cores(mut self, enable: bool) -> Self {
        self.pin_to_cores = enable;
        self
    }

    fn thread_name_for(&self, index: usize) -> String {
        format!("{}-{}", self.thread_name, index)
    }
}

/// Logical CPU count, a sensible worker count for CPU-bound shards
pub fn default_workers() -> usize {
    num_cpus::get()
}

/// Core assignment for each of `workers` workers
///
/// Empty when pinning is disabled or the platform does not report core ids.
pub(crate) fn placement(config: &WorkerConfig, workers: usize) -> Vec<Option<CoreId>> {
    let cores = if config.pin_to_cores {
        core_affinity::get_core_ids().unwrap_or_default()
    } else {
        Vec::new()
    };

    (0..workers)
        .map(|i| {
            if cores.is_empty() {
                None
            } else {
                Some(cores[i % cores.len()])
            }
        })
        .collect()
}

/// Spawn the worker for shard `index` inside `scope`
///
/// Fails with [`Error::Spawn`](crate::Error::Spawn) when the OS refuses the
/// thread; the caller still owns every handle spawned before that.
pub(crate) fn spawn_shard<'scope, 'env, J>(
    scope: &'scope Scope<'scope, 'env>,
    config: &WorkerConfig,
    index: usize,
    core: Option<CoreId>,
    job: J,
) -> Result<ScopedJoinHandle<'scope, ()>>
where
    J: FnOnce() + Send + 'scope,
{
    let mut builder = thread::Builder::new().name(config.thread_name_for(index));

    if let Some(stack_size) = config.stack_size {
        builder = builder.stack_size(stack_size);
    }

    let handle = builder.spawn_scoped(scope, move || {
        if let Some(core) = core {
            if !core_affinity::set_for_current(core) {
                tracing::trace!(shard = index, core = core.id, "core pinning refused");
            }
        }

        job();

        tracing::trace!(shard = index, "shard finished");
    })?;

    tracing::trace!(shard = index, "worker spawned");

    Ok(handle)
}
