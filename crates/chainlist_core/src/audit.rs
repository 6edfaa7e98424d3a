//! Structural audit for chain link consistency.
//!
//! # Responsibility
//! - Walk a chain forward and backward and prove the walks agree.
//! - Cross-check the length counter and the arena slot bookkeeping.
//!
//! # Invariants
//! - Auditing never mutates the chain and never panics on a corrupt one.
//! - A passing audit certifies every documented link rule at once; the
//!   first violated rule is reported and the walk stops there.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::model::chain::Chain;
use crate::model::node::NodeIndex;

/// Result type for audit APIs.
pub type AuditResult<T> = Result<T, AuditError>;

/// First link rule found violated during an audit.
///
/// Slot numbers are raw arena positions, reported for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// The head node carries a back link.
    HeadHasBackLink { head: usize, prev: usize },
    /// The forward walk revisited a slot, so the chain loops.
    CycleDetected { slot: usize, steps: usize },
    /// A link names a slot that holds no node.
    DanglingLink { from: Option<usize>, to: usize },
    /// A back link does not return to the forward predecessor.
    BrokenBackLink {
        node: usize,
        expected_prev: usize,
        actual_prev: Option<usize>,
    },
    /// The length counter disagrees with the forward walk.
    LengthMismatch { recorded: usize, walked: usize },
    /// Occupied slots exist that the forward walk never reached.
    StrandedNodes { occupied: usize, reachable: usize },
}

impl Display for AuditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeadHasBackLink { head, prev } => {
                write!(f, "head slot {head} carries a back link to slot {prev}")
            }
            Self::CycleDetected { slot, steps } => {
                write!(f, "forward walk revisited slot {slot} after {steps} steps")
            }
            Self::DanglingLink { from: Some(from), to } => {
                write!(f, "slot {from} links to vacant slot {to}")
            }
            Self::DanglingLink { from: None, to } => {
                write!(f, "chain head names vacant slot {to}")
            }
            Self::BrokenBackLink {
                node,
                expected_prev,
                actual_prev: Some(actual),
            } => write!(
                f,
                "slot {node} should link back to slot {expected_prev}, links to slot {actual}"
            ),
            Self::BrokenBackLink {
                node,
                expected_prev,
                actual_prev: None,
            } => write!(
                f,
                "slot {node} should link back to slot {expected_prev}, links to nothing"
            ),
            Self::LengthMismatch { recorded, walked } => {
                write!(
                    f,
                    "length counter says {recorded}, forward walk visited {walked}"
                )
            }
            Self::StrandedNodes {
                occupied,
                reachable,
            } => write!(
                f,
                "{occupied} slots occupied, only {reachable} reachable from head"
            ),
        }
    }
}

impl Error for AuditError {}

/// Walk counts and arena bookkeeping captured by a passing audit.
///
/// The report carries structure metadata only, never element values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainAudit {
    /// Nodes visited walking `next` links from the head.
    pub forward_nodes: usize,
    /// Nodes visited walking `prev` links back from the tail.
    pub backward_nodes: usize,
    /// Total arena slots, occupied or not.
    pub arena_slots: usize,
    /// Arena slots holding a node.
    pub arena_occupied: usize,
    /// Arena slots waiting for reuse.
    pub arena_free: usize,
}

/// Checks every link rule of `chain` and reports walk statistics.
///
/// The forward walk runs first and feeds the backward walk, so a single
/// pass over the structure certifies: no back link on the head, mutual
/// adjacency links, no cycle, no dangling link, an accurate length
/// counter and no stranded arena slots.
pub fn audit(chain: &Chain) -> AuditResult<ChainAudit> {
    if let Some(head) = chain.head {
        let node = chain
            .nodes
            .get(head)
            .ok_or(AuditError::DanglingLink {
                from: None,
                to: head.0,
            })?;
        if let Some(prev) = node.prev {
            return Err(AuditError::HeadHasBackLink {
                head: head.0,
                prev: prev.0,
            });
        }
    }

    let path = walk_forward(chain)?;
    let backward_nodes = walk_backward(chain, &path)?;

    if chain.len != path.len() {
        return Err(AuditError::LengthMismatch {
            recorded: chain.len,
            walked: path.len(),
        });
    }

    let occupied = chain.nodes.occupied_count();
    if occupied != path.len() {
        return Err(AuditError::StrandedNodes {
            occupied,
            reachable: path.len(),
        });
    }

    Ok(ChainAudit {
        forward_nodes: path.len(),
        backward_nodes,
        arena_slots: chain.nodes.slot_count(),
        arena_occupied: occupied,
        arena_free: chain.nodes.free_count(),
    })
}

/// Follows `next` links from the head and records the slots visited.
fn walk_forward(chain: &Chain) -> AuditResult<Vec<NodeIndex>> {
    let mut path = Vec::with_capacity(chain.len);
    let mut visited = HashSet::new();
    let mut from = None;
    let mut cursor = chain.head;

    while let Some(index) = cursor {
        if !visited.insert(index) {
            return Err(AuditError::CycleDetected {
                slot: index.0,
                steps: path.len(),
            });
        }
        let node = chain.nodes.get(index).ok_or(AuditError::DanglingLink {
            from,
            to: index.0,
        })?;
        path.push(index);
        from = Some(index.0);
        cursor = node.next;
    }

    Ok(path)
}

/// Follows `prev` links from the last forward node and checks that each
/// step lands on the forward predecessor. Returns the nodes visited.
fn walk_backward(chain: &Chain, path: &[NodeIndex]) -> AuditResult<usize> {
    let mut walked = 0;
    let mut cursor = path.last().copied();

    for (position, expected) in path.iter().enumerate().rev() {
        let index = match cursor {
            Some(index) if index == *expected => index,
            actual => {
                // The node whose back link went astray is the forward
                // successor of the expected stop.
                return Err(AuditError::BrokenBackLink {
                    node: path[position + 1].0,
                    expected_prev: expected.0,
                    actual_prev: actual.map(|index| index.0),
                });
            }
        };
        walked += 1;
        cursor = chain.nodes.node(index).prev;
    }

    Ok(walked)
}
