use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{self, AtomicU64};

/// The identity of a [`Node`](crate::Node).
///
/// Every node receives a fresh [`NodeId`] when it is constructed. Ids are
/// never reused, so two nodes compare equal only if they are the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// The identity of a [`Section`](crate::Section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u64);

static NODE_COUNT: AtomicU64 = AtomicU64::new(1);
static SECTION_COUNT: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    /// Creates a new unique [`NodeId`].
    pub fn unique() -> Self {
        Self(NODE_COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl SectionId {
    /// Creates a new unique [`SectionId`].
    pub fn unique() -> Self {
        Self(SECTION_COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_are_never_reused() {
        let ids: Vec<NodeId> = (0..64).map(|_| NodeId::unique()).collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_section_ids_increase() {
        let first = SectionId::unique();
        let second = SectionId::unique();
        assert!(second.as_u64() > first.as_u64());
    }
}
