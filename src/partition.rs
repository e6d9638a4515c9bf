//! Contiguous partitioning of an input into balanced shards
//!
//! Every call to a reduction plans its shards here first. The plan is a pure
//! function of the input length and the requested worker count: ranges are
//! contiguous, ordered by start, cover `[0, len)` exactly, and their sizes
//! differ by at most one.

use crate::error::{Error, Result};
use std::ops::Range;

/// One contiguous shard of the input, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    /// Position of this shard in partition order
    pub index: usize,

    /// First index covered by the shard
    pub start: usize,

    /// One past the last index covered by the shard
    pub end: usize,
}

impl Partition {
    /// Index range covered by this shard
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of elements in this shard
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this shard covers no elements
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered set of partitions for one reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    len: usize,
    partitions: Vec<Partition>,
}

impl PartitionPlan {
    /// Length of the input this plan covers
    pub fn input_len(&self) -> usize {
        self.len
    }

    /// Number of workers that will run, one per partition
    pub fn effective_workers(&self) -> usize {
        self.partitions.len()
    }

    /// Partitions in order
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Iterate partitions in order
    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    /// Size of the largest partition
    pub fn max_len(&self) -> usize {
        self.partitions.iter().map(Partition::len).max().unwrap_or(0)
    }

    /// Size of the smallest partition
    pub fn min_len(&self) -> usize {
        self.partitions.iter().map(Partition::len).min().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a PartitionPlan {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.partitions.iter()
    }
}

/// Number of workers a reduction over `len` elements actually runs
///
/// Never more workers than elements, and never fewer than one, so an empty
/// input still gets a single worker with an empty shard.
pub fn effective_workers(len: usize, requested: usize) -> Result<usize> {
    if requested == 0 {
        return Err(Error::InvalidArgument(
            "worker count must be at least 1".to_string(),
        ));
    }

    Ok(requested.min(len).max(1))
}

/// Split `[0, len)` into balanced contiguous shards
///
/// The first `len % workers` shards receive one extra element.
pub fn partition(len: usize, requested: usize) -> Result<PartitionPlan> {
    let workers = effective_workers(len, requested)?;
    let base = len / workers;
    let remainder = len % workers;

    let mut partitions = Vec::with_capacity(workers);
    let mut start = 0;

    for index in 0..workers {
        let size = if index < remainder { base + 1 } else { base };
        partitions.push(Partition {
            index,
            start,
            end: start + size,
        });
        start += size;
    }

    debug_assert_eq!(start, len);

    Ok(PartitionPlan { len, partitions })
}
