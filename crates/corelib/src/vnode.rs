//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Instead of holding a single token, an instance may hold many tokens on
//! the ring (virtual nodes). Each token claims the arc of keys from the
//! previous token (exclusive) up to itself (inclusive), so more tokens per
//! instance means a smoother spread of keys.
//!
//! The merge engine yields one `VirtualNode` per token in the ring, in
//! ascending token order.

use std::fmt;

use crate::instance::InstanceId;
use crate::token::Token;

/// A single token position tagged with the instance that holds it.
///
/// Ordered by token first, owner second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualNode<T> {
    /// Token position on the ring.
    pub token: T,

    /// The instance that holds this token.
    ///
    /// Many virtual nodes share the same owner.
    pub owner: InstanceId,
}

impl<T: Token> VirtualNode<T> {
    #[inline]
    pub fn new(token: T, owner: InstanceId) -> Self {
        Self { token, owner }
    }

    #[inline]
    pub fn token(&self) -> T {
        self.token
    }

    #[inline]
    pub fn owner(&self) -> &InstanceId {
        &self.owner
    }
}

impl<T: Token> fmt::Display for VirtualNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNode(token={}, owner={})", self.token, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnode_creation() {
        let vnode = VirtualNode::new(100u64, InstanceId::new("a"));
        assert_eq!(vnode.token(), 100);
        assert_eq!(vnode.owner(), "a");
    }

    #[test]
    fn test_vnode_ordering() {
        let vnode1 = VirtualNode::new(100u32, InstanceId::new("b"));
        let vnode2 = VirtualNode::new(200u32, InstanceId::new("a"));
        let vnode3 = VirtualNode::new(200u32, InstanceId::new("b"));

        assert!(vnode1 < vnode2); // Ordered by token
        assert!(vnode2 < vnode3); // then by owner
    }

    #[test]
    fn test_vnode_display() {
        let vnode = VirtualNode::new(7u32, InstanceId::new("a"));
        assert_eq!(vnode.to_string(), "VNode(token=7, owner=a)");
    }
}
