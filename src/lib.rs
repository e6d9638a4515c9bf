//! # Shard Reduce
//!
//! Fork-join scalar reductions over a slice. A reduction splits its input into
//! balanced contiguous shards, runs a shard function on each shard in its own
//! thread, waits for every worker, and combines the shard results in
//! partition order.
//!
//! ## Key Features
//!
//! - **Balanced partitions**: shard sizes differ by at most one element
//! - **Lock-free result slots**: each worker owns exactly one pre-sized slot
//! - **Deterministic results**: global aggregation reads shards in partition
//!   order, never in completion order
//! - **Per-call workers**: threads are scoped to one reduction and always joined
//! - **Cooperative interruption**: another thread can stop a reduction from
//!   starting further shards; shards already running finish first
//!
//! ## Architecture
//!
//! ```text
//!            partition(len, workers)
//! ┌───────┐ ───────────────────────▶ ┌──────────┬──────────┬──────────┐
//! │ Input │                          │ shard 0  │ shard 1  │ shard 2  │
//! └───────┘                          └────┬─────┴────┬─────┴────┬─────┘
//!                                         │ worker   │ worker   │ worker
//!                                         ▼          ▼          ▼
//!                                    ┌──────────┬──────────┬──────────┐
//!                                    │ slot 0   │ slot 1   │ slot 2   │
//!                                    └────┬─────┴────┬─────┴────┬─────┘
//!                                         └──── join barrier ───┘
//!                                                    │
//!                                                    ▼
//!                                          global_fn(slots in order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shard_reduce::{all, any, maximum, minimum};
//!
//! let values = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! assert_eq!(maximum(&values, 3, i32::cmp), Ok(&9));
//! assert_eq!(minimum(&values, 3, i32::cmp), Ok(&1));
//! assert_eq!(all(&values, 4, |x| *x > 0), Ok(true));
//! assert_eq!(any(&values, 2, |x| *x > 10), Ok(false));
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod interrupt;
pub mod ops;
pub mod partition;
pub mod reduce;
pub mod worker;

// Re-exports
pub use error::{Error, Result};
pub use interrupt::{InterruptHandle, InterruptSignal};
pub use ops::{all, any, maximum, minimum};
pub use partition::{effective_workers, partition, Partition, PartitionPlan};
pub use reduce::{reduce, try_reduce, ReduceConfig, Reducer};
pub use worker::{default_workers, WorkerConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::interrupt::{self, InterruptHandle, InterruptSignal};
    pub use crate::ops::{all, any, maximum, minimum};
    pub use crate::reduce::{reduce, try_reduce, ReduceConfig, Reducer};
    pub use crate::worker::{default_workers, WorkerConfig};
}
