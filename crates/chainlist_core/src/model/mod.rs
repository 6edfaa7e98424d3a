//! Chain data model.
//!
//! # Responsibility
//! - Define the node storage and the doubly-linked chain built on it.
//! - Keep all link mutation inside the crate so chain invariants hold.
//!
//! # Invariants
//! - Nodes are addressed by arena slot handles, never by owning pointers.
//! - Reachability from the chain head is the definition of liveness.
//!
//! # See also
//! - docs/architecture/chain-model.md

pub mod chain;
pub(crate) mod node;
