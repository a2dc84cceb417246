//! Partitioning for rings where instances hold many tokens (virtual nodes).
//!
//! # Algorithm
//!
//! 1. Walk the ascending ranges of the whole ring once (merge engine)
//! 2. Keep the ranges owned by the requested instance
//! 3. If that instance holds the smallest token in the ring, it also owns
//!    the wraparound segment `[highest token + 1, MAX]`
//!
//! # Performance
//!
//! - **Time**: O(t log k) for t tokens held by k instances
//! - **Space**: O(t) for the sorted per-instance copies

use tracing::debug;

use crate::instance::{Instance, InstanceId};
use crate::merge::SortedTokenMergeIterator;
use crate::partitioner::traits::Partitioner;
use crate::range::{RangeSet, TokenRange};
use crate::token::{Keyspace, Token};

/// Partitioner for rings with any number of tokens per instance.
///
/// Never fails: an id that is not in the snapshot, or holds no tokens,
/// gets an empty set.
#[derive(Clone, Debug, Default)]
pub struct MultiTokenPartitioner<T: Token> {
    keyspace: Keyspace<T>,
}

impl<T: Token> MultiTokenPartitioner<T> {
    pub fn new(keyspace: Keyspace<T>) -> Self {
        Self { keyspace }
    }

    /// All ranges owned by `id`, ascending.
    pub fn compute(&self, id: &str, instances: &[Instance<T>]) -> RangeSet<T> {
        let mut owned = RangeSet::new();
        let mut first_owner: Option<InstanceId> = None;
        let mut last_max: Option<T> = None;

        for range in SortedTokenMergeIterator::new(instances) {
            if first_owner.is_none() {
                first_owner = Some(range.owner().clone());
            }
            last_max = Some(range.max());
            if range.owner() == id {
                owned.push(range);
            }
        }

        if let (Some(first), Some(last)) = (first_owner, last_max) {
            if first == id {
                if let Some(wrap) = wraparound(&self.keyspace, first, last) {
                    owned.push(wrap);
                }
            }
        }

        debug!(instance = id, ranges = owned.len(), "multi-token ranges");
        owned
    }
}

/// The segment above the ring's highest token, owned by `owner`.
///
/// `None` when the highest token already sits at (or past) the top of the
/// keyspace, so there is nothing left to wrap.
pub(crate) fn wraparound<T: Token>(
    keyspace: &Keyspace<T>,
    owner: InstanceId,
    last_max: T,
) -> Option<TokenRange<T>> {
    let min = last_max.checked_next()?;
    if min > keyspace.max() {
        return None;
    }
    Some(TokenRange::from_bounds(owner, min, keyspace.max()))
}

impl<T: Token> Partitioner<T> for MultiTokenPartitioner<T> {
    type Output = RangeSet<T>;

    fn compute(&self, id: &str, instances: &[Instance<T>]) -> Self::Output {
        MultiTokenPartitioner::compute(self, id, instances)
    }

    fn keyspace(&self) -> &Keyspace<T> {
        &self.keyspace
    }

    fn name(&self) -> &'static str {
        "MultiTokenPartitioner"
    }
}
