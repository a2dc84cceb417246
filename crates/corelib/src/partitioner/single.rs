//! Equal-width partitioning for rings with one token per instance.
//!
//! # Algorithm
//!
//! 1. Order (a copy of) the instances by their token
//! 2. Find the ordinal `i` of the requested instance among `n`
//! 3. Assign it the `i`-th of `n` equal slots of width `floor(MAX / n)`;
//!    the last slot runs up to `MAX` to absorb the remainder
//!
//! Only the ordering of tokens matters, not the gaps between them.

use tracing::debug;

use crate::error::{Error, Result};
use crate::instance::Instance;
use crate::partitioner::traits::Partitioner;
use crate::range::TokenRange;
use crate::token::{Keyspace, Token};

/// Partitioner for rings where every instance holds exactly one token.
///
/// The one-token precondition is not checked. Instances are ordered by
/// their smallest token, ties by instance id; an instance with no tokens
/// sorts first.
#[derive(Clone, Debug, Default)]
pub struct SingleTokenPartitioner<T: Token> {
    keyspace: Keyspace<T>,
}

impl<T: Token> SingleTokenPartitioner<T> {
    pub fn new(keyspace: Keyspace<T>) -> Self {
        Self { keyspace }
    }

    /// Computes the slot owned by `id`.
    ///
    /// # Errors
    ///
    /// - [`Error::InstanceNotFound`] if `id` is not in `instances` (or
    ///   `instances` is empty)
    /// - [`Error::KeyspaceTooSmall`] if two or more instances share a
    ///   keyspace with fewer than `n` keys above zero, so slots would be empty
    pub fn compute(&self, id: &str, instances: &[Instance<T>]) -> Result<TokenRange<T>> {
        let mut ordered: Vec<(Option<T>, &Instance<T>)> = instances
            .iter()
            .map(|inst| (inst.first_token(), inst))
            .collect();
        ordered.sort_by(|(ta, a), (tb, b)| ta.cmp(tb).then_with(|| a.id.cmp(&b.id)));

        let idx = ordered
            .iter()
            .position(|(_, inst)| inst.id == id)
            .ok_or_else(|| Error::InstanceNotFound(id.to_string()))?;

        let n = ordered.len() as u128;
        let i = idx as u128;
        let max = self.keyspace.max().to_u128();
        let step = max / n;
        // a lone instance takes [0, MAX] even when MAX is 0
        if step == 0 && n > 1 {
            return Err(Error::KeyspaceTooSmall {
                instances: ordered.len(),
                max,
            });
        }

        let lo = step * i;
        let hi = if i == n - 1 { max } else { lo + step - 1 };
        debug!(
            instance = id,
            ordinal = idx,
            instances = ordered.len(),
            min = %lo,
            max = %hi,
            "single-token range"
        );

        // both bounds are <= max, which fits T
        let (Some(min_token), Some(max_token)) = (T::from_u128(lo), T::from_u128(hi)) else {
            return Err(Error::InvalidRange { min: lo, max: hi });
        };
        Ok(TokenRange::from_bounds(
            ordered[idx].1.id.clone(),
            min_token,
            max_token,
        ))
    }
}

impl<T: Token> Partitioner<T> for SingleTokenPartitioner<T> {
    type Output = Result<TokenRange<T>>;

    fn compute(&self, id: &str, instances: &[Instance<T>]) -> Self::Output {
        SingleTokenPartitioner::compute(self, id, instances)
    }

    fn keyspace(&self) -> &Keyspace<T> {
        &self.keyspace
    }

    fn name(&self) -> &'static str {
        "SingleTokenPartitioner"
    }
}
