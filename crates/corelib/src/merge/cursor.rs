//! Peekable, position-aware cursor over one instance's sorted tokens.

use crate::instance::{Instance, InstanceId};
use crate::token::Token;

/// Walks the tokens of a single instance in ascending order.
///
/// The cursor owns a sorted copy of the tokens; the instance it was built
/// from is left as it was.
#[derive(Clone, Debug)]
pub struct TokenCursor<T> {
    owner: InstanceId,
    tokens: Vec<T>,
    pos: usize,
}

impl<T: Token> TokenCursor<T> {
    pub fn new(instance: &Instance<T>) -> Self {
        Self {
            owner: instance.id.clone(),
            tokens: instance.sorted_tokens(),
            pos: 0,
        }
    }

    pub fn owner(&self) -> &InstanceId {
        &self.owner
    }

    /// Index of the next token to be returned.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The next token, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.tokens.get(self.pos).copied()
    }

    /// Returns the next token and moves past it.
    #[inline]
    pub fn advance(&mut self) -> Option<T> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

impl<T: Token> Iterator for TokenCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let inst = Instance::new("a", vec![30u32, 10, 20]);
        let mut cursor = TokenCursor::new(&inst);

        assert_eq!(cursor.peek(), Some(10));
        assert_eq!(cursor.peek(), Some(10));
        assert_eq!(cursor.position(), 0);

        assert_eq!(cursor.advance(), Some(10));
        assert_eq!(cursor.peek(), Some(20));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_exhaustion() {
        let inst = Instance::new("a", vec![5u64]);
        let mut cursor = TokenCursor::new(&inst);
        assert_eq!(cursor.advance(), Some(5));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::<u32>::new("a", Vec::new());
        let cursor = TokenCursor::new(&inst);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.collect::<Vec<_>>(), Vec::<u32>::new());
    }

    #[test]
    fn test_source_untouched() {
        let inst = Instance::new("a", vec![3u32, 1, 2]);
        let cursor = TokenCursor::new(&inst);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(inst.tokens, vec![3, 1, 2]);
    }
}
