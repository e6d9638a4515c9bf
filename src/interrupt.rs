//! Cooperative interruption of a running reduction
//!
//! An [`InterruptHandle`] is kept by whoever may cancel; the paired
//! [`InterruptSignal`] travels with the reduction config. The signal is a
//! shared flag. The reducer reads it before each spawn and once more after
//! joining; each worker reads it before starting its shard. A shard already
//! running is never stopped, so an interrupted call still waits for in-flight
//! shards before it fails with `Interrupted`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Create a connected handle and signal
pub fn pair() -> (InterruptHandle, InterruptSignal) {
    let flag = Arc::new(AtomicBool::new(false));

    (
        InterruptHandle {
            flag: Arc::clone(&flag),
        },
        InterruptSignal { flag },
    )
}

/// Side of the pair that requests interruption
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    flag: Arc<AtomicBool>,
}

impl InterruptHandle {
    /// Interrupt every reduction observing the paired signal
    ///
    /// Calling this more than once has no further effect.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether `interrupt` has been called
    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Side of the pair a reduction observes
#[derive(Debug, Clone)]
pub struct InterruptSignal {
    flag: Arc<AtomicBool>,
}

impl InterruptSignal {
    /// Whether the paired handle has interrupted
    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
