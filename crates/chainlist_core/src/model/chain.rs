//! Doubly-linked chain of integers.
//!
//! # Responsibility
//! - Maintain the head handle and the node arena behind it.
//! - Provide front/back insertion, forward traversal and suffix truncation.
//!
//! # Invariants
//! - `head` is `None` exactly when the chain holds no nodes.
//! - Adjacent nodes always link mutually: when one node's `next` names a
//!   neighbor, that neighbor's `prev` names it back.
//! - The head node carries no back link.
//! - The forward chain is finite and acyclic; every occupied arena slot is
//!   reachable from the head.
//!
//! # See also
//! - docs/architecture/chain-model.md

use std::fmt::{self, Display, Formatter};

use crate::model::node::{NodeArena, NodeIndex};

/// Doubly-linked sequence of `i64` values.
///
/// The chain favors teaching-scale clarity over throughput: no tail handle
/// is cached, so every back-side operation walks the forward links from the
/// head. Appending n values one by one therefore costs O(n^2) overall.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    /// Handle of the first node, `None` for the empty chain.
    pub(crate) head: Option<NodeIndex>,
    /// Owner of every node ever linked into this chain.
    pub(crate) nodes: NodeArena,
    /// Element count, kept in step with every insertion and truncation.
    pub(crate) len: usize,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements currently linked from the head.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the chain holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `value` as the new first element.
    ///
    /// Existing elements keep their relative order behind it. Every `i64`
    /// is accepted, duplicates included.
    pub fn push_front(&mut self, value: i64) {
        let new = self.nodes.insert(value);
        if let Some(old_head) = self.head {
            self.nodes.node_mut(new).next = Some(old_head);
            self.nodes.node_mut(old_head).prev = Some(new);
        }
        self.head = Some(new);
        self.len += 1;
    }

    /// Appends `value` as the new last element.
    ///
    /// Walks the forward links to the current tail first; the walk is the
    /// accepted cost of keeping the data model head-only.
    pub fn push_back(&mut self, value: i64) {
        let new = self.nodes.insert(value);
        match self.tail() {
            Some(old_tail) => {
                self.nodes.node_mut(old_tail).next = Some(new);
                self.nodes.node_mut(new).prev = Some(old_tail);
            }
            None => self.head = Some(new),
        }
        self.len += 1;
    }

    /// First value, if any.
    pub fn front(&self) -> Option<i64> {
        self.head.map(|index| self.nodes.node(index).value)
    }

    /// Last value, if any. Walks the forward links to find it.
    pub fn back(&self) -> Option<i64> {
        self.tail().map(|index| self.nodes.node(index).value)
    }

    /// Lazy front-to-back traversal of the stored values.
    ///
    /// Traversal state lives in the returned iterator. The chain itself is
    /// untouched, so repeated traversals yield identical sequences.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let index = cursor?;
            let node = self.nodes.node(index);
            cursor = node.next;
            Some(node.value)
        })
    }

    /// Keeps the first `keep` elements and frees the rest.
    ///
    /// # Invariants
    /// - The new tail's forward link is cleared and every severed node is
    ///   released back to the arena, so no stale link survives.
    /// - `keep >= len()` leaves the chain unchanged.
    pub fn truncate(&mut self, keep: usize) {
        if keep >= self.len {
            return;
        }

        let mut dropped = match keep.checked_sub(1) {
            None => self.head.take(),
            Some(last_kept) => match self.index_at(last_kept) {
                Some(new_tail) => self.nodes.node_mut(new_tail).next.take(),
                None => None,
            },
        };

        while let Some(index) = dropped {
            let node = self.nodes.remove(index);
            dropped = node.next;
            self.len -= 1;
        }
    }

    /// Handle of the last node, found by walking the forward links.
    fn tail(&self) -> Option<NodeIndex> {
        let mut cursor = self.head?;
        while let Some(next) = self.nodes.node(cursor).next {
            cursor = next;
        }
        Some(cursor)
    }

    /// Handle of the node `position` steps behind the head.
    fn index_at(&self, position: usize) -> Option<NodeIndex> {
        let mut cursor = self.head;
        for _ in 0..position {
            cursor = cursor.and_then(|index| self.nodes.node(index).next);
        }
        cursor
    }
}

/// Renders the forward traversal as values joined by single spaces.
///
/// The empty chain renders as the empty string, so `println!` callers get
/// either one line of values or one blank line.
impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Chain {
    /// Overwrites the forward link at `position` with a raw slot target.
    ///
    /// This bypasses every linking rule on purpose. The result is an
    /// inconsistent structure (stranded nodes, a stale length counter,
    /// possibly a cycle) that exists only so audits can be shown to
    /// reject it.
    pub(crate) fn corrupt_forward_link(&mut self, position: usize, target: Option<usize>) {
        let index = self
            .index_at(position)
            .expect("corruption position out of range");
        self.nodes.node_mut(index).next = target.map(NodeIndex);
    }

    /// Overwrites the back link at `position` with a raw slot target.
    ///
    /// Same caveats as [`Chain::corrupt_forward_link`].
    pub(crate) fn corrupt_back_link(&mut self, position: usize, target: Option<usize>) {
        let index = self
            .index_at(position)
            .expect("corruption position out of range");
        self.nodes.node_mut(index).prev = target.map(NodeIndex);
    }
}
