//! Whole-ring assignment and key lookup.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::instance::{Instance, InstanceId};
use crate::merge::SortedTokenMergeIterator;
use crate::partitioner::multi::wraparound;
use crate::range::{RangeSet, TokenRange};
use crate::token::{Keyspace, Token};

/// Every range of one snapshot, ascending, wraparound included.
///
/// Grouping the ranges by owner gives exactly what
/// [`MultiTokenPartitioner`](crate::partitioner::MultiTokenPartitioner)
/// returns for each id. Lookups are `O(log t)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RingPartition<T: Token> {
    keyspace: Keyspace<T>,
    ranges: Vec<TokenRange<T>>,
}

impl<T: Token> RingPartition<T> {
    pub fn compute(keyspace: Keyspace<T>, instances: &[Instance<T>]) -> Self {
        let mut ranges: Vec<TokenRange<T>> = SortedTokenMergeIterator::new(instances).collect();

        let wrap = match (ranges.first(), ranges.last()) {
            (Some(first), Some(last)) => wraparound(&keyspace, first.owner().clone(), last.max()),
            _ => None,
        };
        if let Some(wrap) = wrap {
            ranges.push(wrap);
        }

        debug!(
            instances = instances.len(),
            ranges = ranges.len(),
            "computed ring partition"
        );
        Self { keyspace, ranges }
    }

    pub fn keyspace(&self) -> &Keyspace<T> {
        &self.keyspace
    }

    pub fn ranges(&self) -> &[TokenRange<T>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The range containing `token`, if any instance covers it.
    pub fn range_for(&self, token: T) -> Option<&TokenRange<T>> {
        let idx = self.ranges.partition_point(|range| range.max() < token);
        self.ranges.get(idx).filter(|range| range.contains(token))
    }

    /// The instance a key hashed to `token` must be dispatched to.
    pub fn owner_of(&self, token: T) -> Option<&InstanceId> {
        self.range_for(token).map(TokenRange::owner)
    }

    /// The ranges owned by `id`, ascending.
    pub fn ranges_for(&self, id: &str) -> RangeSet<T> {
        self.ranges
            .iter()
            .filter(|range| range.owner() == id)
            .cloned()
            .collect()
    }

    /// Ranges grouped by owner, owners in id order.
    pub fn by_owner(&self) -> BTreeMap<InstanceId, RangeSet<T>> {
        let mut owners: BTreeMap<InstanceId, RangeSet<T>> = BTreeMap::new();
        for range in &self.ranges {
            owners
                .entry(range.owner().clone())
                .or_default()
                .push(range.clone());
        }
        owners
    }

    /// Keys covered by the partition; equals the keyspace size whenever
    /// the ring holds at least one token and all tokens are in range.
    pub fn key_count(&self) -> u128 {
        self.ranges.iter().map(TokenRange::key_count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenRange<T>> {
        self.ranges.iter()
    }
}
