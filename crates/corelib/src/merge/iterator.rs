//! Boundary mapping over the merged token stream.

use tracing::{trace, warn};

use crate::instance::Instance;
use crate::merge::merged::MergedTokens;
use crate::range::TokenRange;
use crate::token::Token;

/// Turns the ascending token stream into the ranges it induces.
///
/// Each token `t` owns `[prev + 1, t]`, where `prev` is the previously
/// emitted token (the first token owns `[0, t]`). Over a full pass the
/// ranges partition `[0, highest token]` without gaps or overlaps; the
/// segment above the highest token is the wraparound handled by the
/// partitioners.
///
/// Adjacent ranges of the same owner are emitted separately.
///
/// A token value held more than once would induce an empty range. Only
/// the first holder in instance-id order gets the boundary; later
/// duplicates are skipped.
pub struct SortedTokenMergeIterator<T: Token> {
    merged: MergedTokens<T>,
    prev: Option<T>,
}

impl<T: Token> SortedTokenMergeIterator<T> {
    pub fn new(instances: &[Instance<T>]) -> Self {
        Self {
            merged: MergedTokens::new(instances),
            prev: None,
        }
    }
}

impl<T: Token> Iterator for SortedTokenMergeIterator<T> {
    type Item = TokenRange<T>;

    fn next(&mut self) -> Option<TokenRange<T>> {
        loop {
            let vnode = self.merged.next()?;

            if self.prev == Some(vnode.token) {
                warn!(
                    token = %vnode.token,
                    owner = %vnode.owner,
                    "duplicate ring token, boundary already assigned"
                );
                continue;
            }

            // prev < vnode.token here, so prev + 1 cannot overflow
            let min = match self.prev.and_then(Token::checked_next) {
                Some(min) => min,
                None => T::zero(),
            };
            self.prev = Some(vnode.token);

            trace!(min = %min, max = %vnode.token, owner = %vnode.owner, "token range");
            return Some(TokenRange::from_bounds(vnode.owner, min, vnode.token));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.merged.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(instances: &[Instance<u32>]) -> Vec<(String, u32, u32)> {
        SortedTokenMergeIterator::new(instances)
            .map(|r| (r.owner().to_string(), r.min(), r.max()))
            .collect()
    }

    #[test]
    fn test_boundaries() {
        let instances = vec![
            Instance::new("a", vec![10u32, 50]),
            Instance::new("b", vec![30u32]),
        ];
        assert_eq!(
            bounds(&instances),
            vec![
                ("a".to_string(), 0, 10),
                ("b".to_string(), 11, 30),
                ("a".to_string(), 31, 50),
            ]
        );
    }

    #[test]
    fn test_token_at_zero() {
        let instances = vec![Instance::new("a", vec![0u32, 5])];
        assert_eq!(
            bounds(&instances),
            vec![("a".to_string(), 0, 0), ("a".to_string(), 1, 5)]
        );
    }

    #[test]
    fn test_token_at_top_of_width() {
        let instances = vec![
            Instance::new("a", vec![u32::MAX]),
            Instance::new("b", vec![u32::MAX - 1]),
        ];
        assert_eq!(
            bounds(&instances),
            vec![
                ("b".to_string(), 0, u32::MAX - 1),
                ("a".to_string(), u32::MAX, u32::MAX),
            ]
        );
    }

    #[test]
    fn test_same_owner_not_collapsed() {
        let instances = vec![Instance::new("a", vec![1u32, 2, 3])];
        assert_eq!(bounds(&instances).len(), 3);
    }

    #[test]
    fn test_duplicate_tokens_go_to_lowest_id() {
        let instances = vec![
            Instance::new("b", vec![20u32]),
            Instance::new("a", vec![20u32, 40]),
        ];
        assert_eq!(
            bounds(&instances),
            vec![("a".to_string(), 0, 20), ("a".to_string(), 21, 40)]
        );
    }

    #[test]
    fn test_duplicate_within_instance() {
        let instances = vec![Instance::new("a", vec![u32::MAX, u32::MAX])];
        assert_eq!(bounds(&instances), vec![("a".to_string(), 0, u32::MAX)]);
    }
}
