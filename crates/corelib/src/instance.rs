//! Ring members and the snapshots they are read from.
//!
//! Instances are identified by a string `InstanceId` that is cheap to clone,
//! compare and hash. A `RingSnapshot` is one immutable view of the ring as
//! handed over by the membership layer.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::token::{Keyspace, Token};

/// Identifier of a cluster member.
///
/// Newtype over `Arc<str>` so the many ranges that name the same owner
/// share one allocation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(Arc<str>);

impl InstanceId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl PartialEq<str> for InstanceId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for InstanceId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// A cluster member and the ring tokens it holds.
///
/// Tokens need not be sorted. Partitioners sort private copies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance<T> {
    pub id: InstanceId,
    #[serde(default = "Vec::new")]
    pub tokens: Vec<T>,
}

impl<T: Token> Instance<T> {
    pub fn new(id: impl Into<InstanceId>, tokens: Vec<T>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }

    /// Smallest token held, `None` for an instance without tokens.
    pub fn first_token(&self) -> Option<T> {
        self.tokens.iter().min().copied()
    }

    /// This instance's tokens in ascending order, on a fresh vector.
    pub fn sorted_tokens(&self) -> Vec<T> {
        let mut tokens = self.tokens.clone();
        tokens.sort_unstable();
        tokens
    }
}

/// All ring members at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingSnapshot<T> {
    pub instances: Vec<Instance<T>>,
}

impl<T: Token> RingSnapshot<T> {
    pub fn new(instances: Vec<Instance<T>>) -> Self {
        Self { instances }
    }

    pub fn instances(&self) -> &[Instance<T>] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Instance<T>> {
        self.instances.iter().find(|inst| inst.id == id)
    }

    /// Total number of tokens across every instance.
    pub fn token_count(&self) -> usize {
        self.instances.iter().map(|inst| inst.tokens.len()).sum()
    }

    /// Checks the invariants partitioners assume but never enforce.
    ///
    /// Rejects duplicate instance ids, tokens beyond the keyspace, and a
    /// token held twice (by one instance or by two).
    pub fn validate(&self, keyspace: &Keyspace<T>) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.instances.len());
        let mut holders: HashMap<T, &InstanceId> = HashMap::with_capacity(self.token_count());

        for inst in &self.instances {
            if !ids.insert(&inst.id) {
                return Err(Error::InvalidSnapshot(format!(
                    "duplicate instance id {}",
                    inst.id
                )));
            }
            for &token in &inst.tokens {
                if !keyspace.contains(token) {
                    return Err(Error::InvalidSnapshot(format!(
                        "token {} of instance {} exceeds keyspace max {}",
                        token,
                        inst.id,
                        keyspace.max()
                    )));
                }
                if let Some(holder) = holders.insert(token, &inst.id) {
                    return Err(Error::InvalidSnapshot(format!(
                        "token {} held by both {} and {}",
                        token, holder, inst.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<T> From<Vec<Instance<T>>> for RingSnapshot<T> {
    fn from(instances: Vec<Instance<T>>) -> Self {
        Self { instances }
    }
}

impl<T> AsRef<[Instance<T>]> for RingSnapshot<T> {
    fn as_ref(&self) -> &[Instance<T>] {
        &self.instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_ignores_order() {
        let inst = Instance::new("a", vec![50u32, 10, 30]);
        assert_eq!(inst.first_token(), Some(10));
        assert_eq!(inst.sorted_tokens(), vec![10, 30, 50]);
        // caller's vector keeps its order
        assert_eq!(inst.tokens, vec![50, 10, 30]);
    }

    #[test]
    fn test_first_token_empty() {
        let inst = Instance::<u32>::new("a", Vec::new());
        assert_eq!(inst.first_token(), None);
    }

    #[test]
    fn test_snapshot_lookup() {
        let snap = RingSnapshot::new(vec![
            Instance::new("a", vec![1u64, 2]),
            Instance::new("b", vec![3u64]),
        ]);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.token_count(), 3);
        assert!(snap.get("b").is_some());
        assert!(snap.get("c").is_none());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let snap = RingSnapshot::new(vec![
            Instance::new("a", vec![10u32, 50]),
            Instance::new("b", vec![30u32]),
        ]);
        assert_eq!(snap.validate(&Keyspace::new(63)), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let snap = RingSnapshot::new(vec![
            Instance::new("a", vec![10u32]),
            Instance::new("b", vec![10u32]),
        ]);
        assert!(matches!(
            snap.validate(&Keyspace::full()),
            Err(Error::InvalidSnapshot(_))
        ));

        let snap = RingSnapshot::new(vec![
            Instance::new("a", vec![1u32]),
            Instance::new("a", vec![2u32]),
        ]);
        assert!(snap.validate(&Keyspace::full()).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let snap = RingSnapshot::new(vec![Instance::new("a", vec![64u32])]);
        assert!(snap.validate(&Keyspace::new(63)).is_err());
    }

    #[test]
    fn test_snapshot_json() {
        let snap: RingSnapshot<u32> =
            serde_json::from_str(r#"{"instances":[{"id":"a","tokens":[3,1]},{"id":"b"}]}"#)
                .unwrap();
        assert_eq!(snap.instances[0].id, "a");
        assert_eq!(snap.instances[0].tokens, vec![3, 1]);
        assert!(snap.instances[1].tokens.is_empty());
    }

    fn load<T: Token + serde::de::DeserializeOwned>(raw: &str) -> RingSnapshot<T> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_snapshot_json_any_width() {
        let raw = r#"{"instances":[{"id":"a","tokens":[7]},{"id":"b"}]}"#;
        assert_eq!(load::<u16>(raw).token_count(), 1);
        assert_eq!(load::<u64>(raw).instances[0].tokens, vec![7u64]);
        assert!(load::<u32>(raw).get("b").is_some_and(|b| b.tokens.is_empty()));
    }
}
