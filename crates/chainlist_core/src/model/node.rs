//! Node storage for the doubly-linked chain.
//!
//! # Responsibility
//! - Define the node shape: one integer payload plus two adjacency links.
//! - Own every node in a slot arena so links stay plain indices.
//!
//! # Invariants
//! - A node's value never changes after allocation.
//! - `occupied_count() + free_count() == slot_count()` after every operation.
//! - Vacant slots hold no payload and are tracked on the free stack exactly
//!   once.
//!
//! # See also
//! - docs/architecture/chain-model.md

/// Handle to one slot in a [`NodeArena`].
///
/// Links between nodes are stored as slot handles rather than owning
/// references. The arena owns every node, so mutual `next`/`prev` links
/// cannot form an ownership cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(pub(crate) usize);

/// Single chain element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// Payload. Never rewritten after allocation.
    pub(crate) value: i64,
    /// Forward link toward the tail. `None` marks the tail node.
    pub(crate) next: Option<NodeIndex>,
    /// Back link toward the head. `None` marks the head node.
    pub(crate) prev: Option<NodeIndex>,
}

/// Slot arena holding every node of one chain.
///
/// Freed slots are recycled newest-first before the slab grows, so slab
/// size stays bounded by the longest length the chain has reached.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
}

impl NodeArena {
    /// Allocates a detached node (no links) and returns its handle.
    pub(crate) fn insert(&mut self, value: i64) -> NodeIndex {
        let node = Node {
            value,
            next: None,
            prev: None,
        };
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeIndex(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Frees one occupied slot and returns the node it held.
    ///
    /// # Invariants
    /// - `index` must be a live handle; freeing a vacant slot is a logic
    ///   error in the chain layer, not a recoverable condition.
    pub(crate) fn remove(&mut self, index: NodeIndex) -> Node {
        match self.slots[index.0].take() {
            Some(node) => {
                self.free.push(index.0);
                node
            }
            None => panic!("freed vacant slot {}", index.0),
        }
    }

    /// Borrows one live node. Panics on a vacant slot for the same reason
    /// as [`NodeArena::remove`].
    pub(crate) fn node(&self, index: NodeIndex) -> &Node {
        match self.get(index) {
            Some(node) => node,
            None => panic!("followed a link into vacant slot {}", index.0),
        }
    }

    /// Mutably borrows one live node.
    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        match self.slots[index.0].as_mut() {
            Some(node) => node,
            None => panic!("followed a link into vacant slot {}", index.0),
        }
    }

    /// Borrows a slot without asserting occupancy.
    ///
    /// Audits use this to probe links that may no longer be valid.
    pub(crate) fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.slots.get(index.0).and_then(|slot| slot.as_ref())
    }

    /// Total slots ever allocated, occupied or not.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently holding a node.
    pub(crate) fn occupied_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Slots waiting for reuse.
    pub(crate) fn free_count(&self) -> usize {
        self.free.len()
    }
}
