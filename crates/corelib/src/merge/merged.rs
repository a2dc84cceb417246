//! K-way merge of per-instance token cursors.

use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::instance::Instance;
use crate::merge::cursor::TokenCursor;
use crate::token::Token;
use crate::vnode::VirtualNode;

/// Yields every token of every instance in ascending order.
///
/// Holds one queue entry per non-exhausted cursor, keyed by the cursor's
/// next token. Cursors are ranked by instance id, and the rank is part of
/// the priority, so equal tokens held by different instances come out in
/// instance-id order.
///
/// # Performance
///
/// - **Time**: O(t log k) for t tokens over k instances, plus the
///   per-instance sorts
/// - **Space**: O(t) for the sorted copies, O(k) for the queue
pub struct MergedTokens<T: Token> {
    cursors: Vec<TokenCursor<T>>,
    queue: PriorityQueue<usize, Reverse<(T, usize)>>,
    remaining: usize,
}

impl<T: Token> MergedTokens<T> {
    pub fn new(instances: &[Instance<T>]) -> Self {
        let mut ranked: Vec<&Instance<T>> = instances.iter().collect();
        ranked.sort_by(|a, b| a.id.cmp(&b.id));

        let cursors: Vec<TokenCursor<T>> = ranked.into_iter().map(TokenCursor::new).collect();
        let remaining = cursors.iter().map(TokenCursor::remaining).sum();

        let mut queue = PriorityQueue::with_capacity(cursors.len());
        for (rank, cursor) in cursors.iter().enumerate() {
            if let Some(token) = cursor.peek() {
                queue.push(rank, Reverse((token, rank)));
            }
        }

        Self {
            cursors,
            queue,
            remaining,
        }
    }
}

impl<T: Token> Iterator for MergedTokens<T> {
    type Item = VirtualNode<T>;

    fn next(&mut self) -> Option<VirtualNode<T>> {
        let (rank, _) = self.queue.pop()?;
        let cursor = &mut self.cursors[rank];
        let token = cursor.advance()?;
        if let Some(next) = cursor.peek() {
            self.queue.push(rank, Reverse((next, rank)));
        }
        self.remaining -= 1;
        Some(VirtualNode::new(token, cursor.owner().clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Token> ExactSizeIterator for MergedTokens<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_and_owners(instances: &[Instance<u32>]) -> Vec<(u32, String)> {
        MergedTokens::new(instances)
            .map(|v| (v.token, v.owner.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_ascending() {
        let instances = vec![
            Instance::new("a", vec![50u32, 10]),
            Instance::new("b", vec![30u32]),
            Instance::new("c", vec![40u32, 5, 60]),
        ];
        let merged = tokens_and_owners(&instances);
        let tokens: Vec<u32> = merged.iter().map(|(t, _)| *t).collect();
        assert_eq!(tokens, vec![5, 10, 30, 40, 50, 60]);
        assert_eq!(merged[0].1, "c");
        assert_eq!(merged[1].1, "a");
        assert_eq!(merged[2].1, "b");
    }

    #[test]
    fn test_merge_ties_by_instance_id() {
        let instances = vec![
            Instance::new("z", vec![7u32]),
            Instance::new("m", vec![7u32]),
            Instance::new("a", vec![7u32]),
        ];
        let owners: Vec<String> = tokens_and_owners(&instances)
            .into_iter()
            .map(|(_, o)| o)
            .collect();
        assert_eq!(owners, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_merge_skips_empty_instances() {
        let instances = vec![
            Instance::new("a", Vec::<u32>::new()),
            Instance::new("b", vec![1u32]),
            Instance::new("c", Vec::<u32>::new()),
        ];
        assert_eq!(tokens_and_owners(&instances), vec![(1, "b".to_string())]);
    }

    #[test]
    fn test_merge_empty_snapshot() {
        let merged = MergedTokens::<u64>::new(&[]);
        assert_eq!(merged.len(), 0);
        assert_eq!(merged.count(), 0);
    }

    #[test]
    fn test_exact_size() {
        let instances = vec![
            Instance::new("a", vec![1u32, 2, 3]),
            Instance::new("b", vec![4u32]),
        ];
        let mut merged = MergedTokens::new(&instances);
        assert_eq!(merged.len(), 4);
        merged.next();
        assert_eq!(merged.len(), 3);
    }
}
